#![warn(rust_2018_idioms)]

mod app;
mod util;

use tracing::error;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        util::log::init(false);
        error!("mode not specified (G: generate, V: validate, T: show template)");
        std::process::exit(1);
    }

    let args2 = args[2..].to_vec();
    let res = match args[1].as_str() {
        "G" => {
            // Generate (カタログ生成モード)
            app::GenerateApp::new(args2).run()
        }
        "V" => {
            // Validate (カタログ検証モード)
            app::ValidateApp::new(args2).run()
        }
        "T" => {
            // Template (手役表示モード)
            app::ShowApp::new(args2).run()
        }
        m => Err(format!("unknown mode: {}", m).into()),
    };

    if let Err(e) = res {
        util::log::init(false);
        error!("{}", e);
        std::process::exit(1);
    }
}
