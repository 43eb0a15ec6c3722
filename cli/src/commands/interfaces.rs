use portview_common::config::Config;
use portview_common::error::DiscoveryError;
use portview_core::interfaces;

use crate::terminal::print;

pub fn interfaces(cfg: &Config) -> anyhow::Result<()> {
    print::header("local interfaces", cfg.quiet);

    match interfaces::discover_local_ipv4() {
        Ok(addresses) => {
            print::addresses(&addresses);
            Ok(())
        }
        Err(DiscoveryError::NoAddressesFound) => {
            print::no_addresses();
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
