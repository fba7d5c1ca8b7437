use std::io;
use crate::config::config::{default_filters, DEFAULT_SOURCE_ENCODING, DEFAULT_TARGET_ENCODING};
use crate::config::ports::{AppConfig, ConfigPort};
use crate::models::conversion::InputTarget;

// 配置服務，負責選擇適當的配置適配器
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> io::Result<AppConfig> {
        self.config_port.get_config()
    }
}

// 預設配置適配器：GBK → UTF-8，預設過濾模式，輸出位置採預設規則
pub struct DefaultConfigAdapter {
    target: InputTarget,
}

impl DefaultConfigAdapter {
    pub fn new(target: InputTarget) -> Self {
        DefaultConfigAdapter { target }
    }
}

impl ConfigPort for DefaultConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        Ok(AppConfig {
            target: self.target.clone(),
            output: None,
            source_encoding: DEFAULT_SOURCE_ENCODING.to_string(),
            target_encoding: DEFAULT_TARGET_ENCODING.to_string(),
            filters: default_filters(),
            overwrite: false,
            no_progress: false,
        })
    }
}
