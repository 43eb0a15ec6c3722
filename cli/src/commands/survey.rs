use std::time::Instant;

use portview_common::config::Config;
use portview_common::error::DiscoveryError;
use portview_common::network::view::NetworkView;
use portview_core::session;

use crate::commands::ScanTuning;
use crate::terminal::{print, spinner};

pub async fn survey(tuning: ScanTuning, cfg: &Config) -> anyhow::Result<()> {
    print::header("surveying local interfaces", cfg.quiet);

    let scanner = tuning.build_scanner();
    let start_time: Instant = Instant::now();

    let view: NetworkView = match session::survey(&scanner).await {
        Ok(view) => view,
        Err(DiscoveryError::NoAddressesFound) => NetworkView::new(),
        Err(e) => {
            spinner::finish();
            return Err(e.into());
        }
    };

    spinner::finish();

    print::network_view(&view, cfg.quiet);
    if !view.is_empty() {
        print::summary(view.addresses().len(), start_time.elapsed(), cfg.quiet);
    }
    Ok(())
}
