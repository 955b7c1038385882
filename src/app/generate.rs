use std::io::Write;

use mjtemplate::{generate, render_catalog, Generation};
use tracing::{info, warn};

use crate::util::log;
use crate::util::misc::*;

const DEFAULT_OUTPUT: &str = "hand_templates.json";

#[derive(Debug)]
pub struct GenerateApp {
    args: Vec<String>,
    output: String,
    copy_to: Option<String>,
    print: bool,
    strict: bool,
    verbose: bool,
}

impl GenerateApp {
    pub fn new(args: Vec<String>) -> Self {
        Self {
            args,
            output: DEFAULT_OUTPUT.to_string(),
            copy_to: None,
            print: false,
            strict: false,
            verbose: false,
        }
    }

    pub fn run(&mut self) -> Res {
        let mut it = self.args.iter();
        while let Some(s) = it.next() {
            match s.as_str() {
                "-o" => self.output = next_value(&mut it, s)?,
                "-c" => self.copy_to = Some(next_value(&mut it, s)?),
                "-p" => self.print = true,
                "-s" => self.strict = true,
                "-v" => self.verbose = true,
                opt => return Err(format!("unknown option: {}", opt).into()),
            }
        }
        log::init(self.verbose);

        let generation = generate();
        for issue in &generation.issues {
            warn!("{}", issue);
        }
        let data = render_catalog(&generation.catalog)?;

        if self.print {
            let mut out = std::io::stdout().lock();
            out.write_all(&data)?;
            writeln!(out)?;
        } else {
            write_to_file(&self.output, &data)?;
            info!(path = %self.output, bytes = data.len(), "catalog written");

            // コピーに失敗しても生成自体は成功扱い
            if let Some(dst) = &self.copy_to {
                match copy_file(&self.output, dst) {
                    Ok(_) => info!(path = %dst, "catalog copied"),
                    Err(e) => warn!("could not copy catalog to {}: {}", dst, e),
                }
            }
        }

        if self.strict {
            check_strict(&generation)?;
        }
        Ok(())
    }
}

// -s: 有効なバリエーションを持たない手役があればエラー
fn check_strict(generation: &Generation) -> Res {
    if generation.has_empty_template() {
        return Err("catalog contains templates without valid variations".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mjtemplate::hand::{validate_catalog, Issue};
    use mjtemplate::Catalog;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_generate_writes_and_copies() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out/hand_templates.json");
        let copy = dir.path().join("client/public/data/hand_templates.json");
        let out_s = out.to_str().unwrap();
        let copy_s = copy.to_str().unwrap();

        GenerateApp::new(args(&["-o", out_s, "-c", copy_s, "-s"]))
            .run()
            .unwrap();

        let data = std::fs::read(&out).unwrap();
        assert_eq!(data, std::fs::read(&copy).unwrap());
        let catalog: Catalog = serde_json::from_slice(&data).unwrap();
        assert_eq!(catalog.version, "1.0.0");
        assert!(validate_catalog(&catalog).is_empty());
    }

    #[test]
    fn test_copy_failure_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("hand_templates.json");
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"").unwrap();
        // 通常ファイルの下にはディレクトリを作れない
        let copy = blocker.join("data/hand_templates.json");

        GenerateApp::new(args(&["-o", out.to_str().unwrap(), "-c", copy.to_str().unwrap()]))
            .run()
            .unwrap();

        assert!(out.is_file());
        assert!(!copy.exists());
    }

    #[test]
    fn test_check_strict() {
        let mut generation = generate();
        assert!(check_strict(&generation).is_ok());

        generation.issues.push(Issue::DroppedVariation {
            template: "t".to_string(),
            index: 0,
            tiles: 13,
        });
        assert!(check_strict(&generation).is_ok());

        generation.issues.push(Issue::EmptyTemplate {
            template: "t".to_string(),
        });
        assert!(check_strict(&generation).is_err());
    }

    #[test]
    fn test_bad_options() {
        assert!(GenerateApp::new(args(&["-x"])).run().is_err());
        assert!(GenerateApp::new(args(&["-o"])).run().is_err());
    }
}
