pub mod error;

pub mod config {
    pub mod config;
    pub mod git;
    pub mod ports;
    pub mod sync;
}

pub mod models {
    pub mod conversion;
    pub mod file;
    pub mod sync;
}

pub mod service {
    pub mod codec;
    pub mod config_service;
    pub mod file;
    pub mod git;
    pub mod sync;
    pub mod transcode;
    pub mod traits {
        pub mod i_service;
    }
}

pub mod facade {
    pub mod conversion_facade;
    pub mod traits {
        pub mod i_conversion;
    }
}

pub mod action {
    pub mod cli;
    pub mod git;
    pub mod interactive;
    pub mod sync;
}

pub mod utils {
    pub mod path;
    pub mod utils;
}
