use mjtemplate::hand::{find_pattern, PATTERNS};
use mjtemplate::model::HAND_SIZE;

use crate::util::log;
use crate::util::misc::*;

// 手役の一覧, もしくは指定した手役のバリエーションを表示
#[derive(Debug)]
pub struct ShowApp {
    args: Vec<String>,
    verbose: bool,
}

impl ShowApp {
    pub fn new(args: Vec<String>) -> Self {
        Self {
            args,
            verbose: false,
        }
    }

    pub fn run(&mut self) -> Res {
        let mut id = None;
        for s in &self.args {
            match s.as_str() {
                "-v" => self.verbose = true,
                opt if opt.starts_with('-') => return Err(format!("unknown option: {}", opt).into()),
                _ => id = Some(s.clone()),
            }
        }
        log::init(self.verbose);

        match id {
            Some(id) => {
                let pattern = find_pattern(&id).ok_or_else(|| format!("unknown template: {}", id))?;
                let t = pattern();
                let record = t.to_record();
                print!("{}", t);
                println!(
                    "{} of {} variations have {} tiles",
                    record.variations.len(),
                    t.variations().len(),
                    HAND_SIZE
                );
            }
            None => {
                for (id, pattern) in PATTERNS {
                    let t = pattern();
                    println!("{:24} {:3} {}", id, t.variations().len(), t.name);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show() {
        assert!(ShowApp::new(vec![]).run().is_ok());
        assert!(ShowApp::new(vec!["p3_k6_p6_k9".to_string()]).run().is_ok());
        assert!(ShowApp::new(vec!["nope".to_string()]).run().is_err());
    }
}
