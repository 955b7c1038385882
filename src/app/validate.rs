use mjtemplate::hand::validate_catalog;
use mjtemplate::Catalog;
use tracing::{error, info};

use crate::util::log;
use crate::util::misc::*;

#[derive(Debug)]
pub struct ValidateApp {
    args: Vec<String>,
    verbose: bool,
}

impl ValidateApp {
    pub fn new(args: Vec<String>) -> Self {
        Self {
            args,
            verbose: false,
        }
    }

    pub fn run(&mut self) -> Res {
        let mut file_path = "".to_string();
        for s in &self.args {
            match s.as_str() {
                "-v" => self.verbose = true,
                opt if opt.starts_with('-') => return Err(format!("unknown option: {}", opt).into()),
                _ => {
                    if !file_path.is_empty() {
                        return Err("multiple catalog files are not allowed".into());
                    }
                    file_path = s.clone();
                }
            }
        }
        if file_path.is_empty() {
            return Err("catalog file not specified".into());
        }
        log::init(self.verbose);

        let data = std::fs::read(&file_path)?;
        let catalog: Catalog = serde_json::from_slice(&data)?;
        let errors = validate_catalog(&catalog);
        for e in &errors {
            error!("{}", e);
        }

        let n_variations: usize = catalog.templates.iter().map(|t| t.variations.len()).sum();
        info!(
            path = %file_path,
            version = %catalog.version,
            templates = catalog.templates.len(),
            variations = n_variations,
            "catalog checked"
        );

        if !errors.is_empty() {
            return Err(format!("{} problems found in {}", errors.len(), file_path).into());
        }
        Ok(())
    }
}
