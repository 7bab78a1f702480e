use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

pub struct SiftFormatter;

impl<S, N> FormatEvent<S, N> for SiftFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let level = *meta.level();

        let symbol: ColoredString = match level {
            Level::TRACE => "trace:".dimmed(),
            Level::DEBUG => "debug:".cyan(),
            Level::INFO => "::".green().bold(),
            Level::WARN => "!!".yellow().bold(),
            Level::ERROR => "xx".red().bold(),
        };

        write!(writer, "{symbol} ")?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;

        // Stage-level events carry their module so RUST_LOG runs are easy to
        // narrow down.
        if level >= Level::DEBUG {
            write!(writer, " {}", format!("({})", meta.target()).bright_black())?;
        }

        writeln!(writer)
    }
}

/// Events go to stderr so the extracted addresses on stdout stay clean.
/// Silent unless `RUST_LOG` opts in.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(SiftFormatter)
        .with_writer(std::io::stderr)
        .init();
}
