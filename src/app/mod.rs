// mainから直接呼び出すアプリケーションの動作モード(G, V, T)のモジュール

mod generate;
mod show;
mod validate;

pub use generate::GenerateApp;
pub use show::ShowApp;
pub use validate::ValidateApp;
