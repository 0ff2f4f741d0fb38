use crate::core::{
    dirs::get_config_file,
    error::Result,
    print_info, print_section_header, print_success, LatrConfig,
};

/// Show the effective configuration, optionally writing the defaults file first
pub fn execute_config(init: bool) -> Result<()> {
    let config_file = get_config_file()?;

    if init {
        if config_file.exists() {
            print_info(&format!(
                "Config file already exists at {}",
                config_file.display()
            ));
        } else {
            LatrConfig::default().save_to(&config_file)?;
            print_success(&format!("Wrote default config to {}", config_file.display()));
        }
    }

    let config = LatrConfig::load_from(&config_file)?;
    print_section_header(&format!("Configuration ({})", config_file.display()));
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
