/// `RUST_LOG` prime sur `default_level` quand il est défini
pub fn init_logging_and_env(default_level: &str) {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", default_level);
    }
    env_logger::init();
}
