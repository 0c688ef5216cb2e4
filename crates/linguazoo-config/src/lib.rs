use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::network::NetworkConfig;
use self::store::StoreConfig;
use self::translator::TranslatorConfig;

pub mod dictionary;
pub mod network;
pub mod store;
pub mod translator;

#[derive(Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub translator: TranslatorConfig,
    pub dictionary: DictionaryConfig,
    pub store: StoreConfig,
    pub network: NetworkConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            translator: TranslatorConfig::default(),
            dictionary: DictionaryConfig::default(),
            store: StoreConfig::new(),
            network: NetworkConfig::new(),
        }
    }
}
