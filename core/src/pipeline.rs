//! Drives the five stages in order and owns the abort-on-first-failure
//! policy.

use std::io::Write;

use ipsift_common::config::Config;
use ipsift_common::error::PipelineError;
use rand::Rng;
use tracing::debug;

use crate::document::Document;
use crate::{extract, store};

/// Generate, serialize, persist, reload, extract and print, then clean up.
///
/// The first failing stage aborts the run; cleanup only happens on the
/// success path, so a failure before the final stage leaves the artifact on
/// disk. Extracted addresses are written to `out` one per line, before the
/// artifact is removed.
pub fn run<R, W>(cfg: &Config, rng: &mut R, out: &mut W) -> Result<(), PipelineError>
where
    R: Rng + ?Sized,
    W: Write,
{
    let doc = Document::generate(rng);
    debug!(
        "generated {} private and {} public addresses",
        doc.private_addresses.len(),
        doc.public_addresses.len()
    );

    let text = doc.to_text()?;
    store::persist(&cfg.artifact, &text)?;
    let raw = store::reload(&cfg.artifact)?;
    debug!(path = %cfg.artifact.display(), bytes = raw.len(), "artifact round-tripped");

    let addresses = extract::extract(&raw);
    debug!("extracted {} unique addresses", addresses.len());
    for addr in &addresses {
        writeln!(out, "{addr}").map_err(PipelineError::Output)?;
    }

    store::remove(&cfg.artifact)
}
