//! Subcommand implementations. Each writes its result to `out`.

use crate::args::Command;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, warn};
use wmon::VARIANTS;
use wmon::domain::config::MonitorConfig;
use wmon::domain::variant::VariantDescriptor;

/// Runs `command` against the configured variant.
///
/// `variants` never resolves, so it still lists what is available when the configured
/// name is wrong.
pub(crate) fn run(
    command: Command,
    config: &MonitorConfig,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Command::Variants {} => list_variants(&config.variant, out),
        command => {
            let variant = wmon::resolve(config).context("Failed to load variant")?;
            debug!(?command, variant = variant.name, "Running command");
            run_with_variant(command, &variant, input, out)
        },
    }
}

fn run_with_variant(
    command: Command,
    variant: &VariantDescriptor,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Command::Variants {} => list_variants(variant.name, out),
        Command::Show {} => show(variant, out),
        Command::Feeds {} => feeds(variant, out),
        Command::Relevant { primary, secondary } => {
            writeln!(out, "{}", variant.is_relevant(&primary, &secondary))?;
            Ok(())
        },
        Command::Locate { latitude, longitude } => {
            writeln!(out, "{}", variant.is_in_region(latitude, longitude))?;
            Ok(())
        },
        Command::Filter {} => filter(variant, input, out),
        Command::Validate {} => summary(variant, out),
    }
}

fn list_variants(active: &str, out: &mut impl Write) -> Result<()> {
    if VARIANTS.get(active).is_none() {
        warn!(variant = active, "Configured variant is not registered");
    }
    for variant in VARIANTS.iter() {
        let marker = if variant.name.eq_ignore_ascii_case(active.trim()) { '*' } else { ' ' };
        writeln!(out, "{marker} {}\t{}", variant.name, variant.display_name)?;
    }
    Ok(())
}

fn show(variant: &VariantDescriptor, out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, variant).context("Failed to serialize variant")?;
    writeln!(out)?;
    Ok(())
}

fn feeds(variant: &VariantDescriptor, out: &mut impl Write) -> Result<()> {
    for feed in variant.prioritized_feeds() {
        writeln!(out, "{}\t{}\t{}", feed.tier, feed.name, feed.url)?;
    }
    Ok(())
}

/// Invalid UTF-8 is replaced rather than rejected, so one bad line never ends the batch.
fn filter(variant: &VariantDescriptor, mut input: impl BufRead, out: &mut impl Write) -> Result<()> {
    let (mut seen, mut kept) = (0_usize, 0_usize);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf).context("Failed to read stdin")? == 0 {
            break;
        }
        let raw = buf.strip_suffix(b"\n").unwrap_or(buf.as_slice());
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let line = String::from_utf8_lossy(raw);
        if line.trim().is_empty() {
            continue;
        }
        seen += 1;
        let (primary, secondary) = line.split_once('\t').unwrap_or((&*line, ""));
        if variant.is_relevant(primary, secondary) {
            kept += 1;
            writeln!(out, "{line}")?;
        }
    }
    debug!(variant = variant.name, seen, kept, "Filtered input");
    Ok(())
}

// Resolution already validated the catalog; reaching here means it is consistent.
fn summary(variant: &VariantDescriptor, out: &mut impl Write) -> Result<()> {
    let region = &variant.region;
    writeln!(
        out,
        "{}: ok ({} feeds, {} keywords, {} locations, {} borders, {} corridors)",
        variant.name,
        variant.feeds.sources.len(),
        region.keywords.len(),
        region.strategic_locations.len(),
        region.borders.len(),
        region.corridors.len(),
    )?;
    Ok(())
}
