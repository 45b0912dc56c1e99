//! Print REST URLs.

use anyhow::Result;
use splunk_client::endpoints::build_request_path;
use splunk_config::ConnectionConfig;

pub fn run(connection: &ConnectionConfig, segments: &[String]) -> Result<()> {
    let url = build_request_path(
        &connection.base_url,
        segments,
        connection.namespace.as_deref(),
        connection.owner.as_deref(),
    )?;
    println!("{}", url);
    Ok(())
}
