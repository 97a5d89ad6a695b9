//! Single-line record formatter.

use std::fmt;
use time::macros::format_description;
use time::OffsetDateTime;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Formats each record as `<timestamp> [<target>] <LEVEL>: <message>`.
///
/// Span context is not rendered; fields other than the message follow it as
/// `key=value` pairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFormatter;

impl LogFormatter {
    fn timestamp() -> String {
        OffsetDateTime::now_utc()
            .format(format_description!(
                "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3][offset_hour sign:mandatory]:[offset_minute]"
            ))
            .unwrap_or_else(|_| String::from("????-??-??T??:??:??.???+00:00"))
    }
}

impl<S, N> FormatEvent<S, N> for LogFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();
        write!(
            writer,
            "{} [{}] {}: ",
            Self::timestamp(),
            metadata.target(),
            metadata.level()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing::Level;
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Buffer {
        type Writer = Buffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_record_layout() {
        let buffer = Buffer::default();
        let subscriber = crate::logging::subscriber_with_writer(Level::TRACE, buffer.clone());

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(target: "Configuration", "The key missing was not found");
        });

        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        let line = output.lines().next().unwrap();
        let (timestamp, rest) = line.split_once(' ').unwrap();

        assert_eq!(rest, "[Configuration] WARN: The key missing was not found");
        assert_eq!(timestamp.len(), "2014-08-13T10:00:00.000+00:00".len());
        assert_eq!(&timestamp[4..5], "-");
        assert_eq!(&timestamp[10..11], "T");
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn test_level_filter() {
        let buffer = Buffer::default();
        let subscriber = crate::logging::subscriber_with_writer(Level::INFO, buffer.clone());

        tracing::subscriber::with_default(subscriber, || {
            tracing::trace!(target: "Downloader", "hidden");
            tracing::info!(target: "Downloader", "shown");
        });

        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert!(!output.contains("hidden"));
        assert!(output.contains("[Downloader] INFO: shown"));
    }
}
