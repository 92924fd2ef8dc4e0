use dnsv_domain::Config;

/// The built-in defaults are the only configuration source.
pub fn load_config() -> anyhow::Result<Config> {
    let config = Config::default();
    config.validate()?;
    Ok(config)
}
