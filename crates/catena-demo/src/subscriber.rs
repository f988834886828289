use std::{
    fmt::{self, Debug, Write as _},
    io::{self, Write},
};

use owo_colors::OwoColorize;
use spin::mutex::SpinMutex;
use tracing::{
    field::{Field, Visit},
    level_filters::LevelFilter,
    span, Event, Level, Metadata, Subscriber,
};

/// Writes events to stderr as `LEVEL span:span message key=value`.
#[derive(Debug)]
pub struct DemoSubscriber {
    inner: SpinMutex<Inner>,
    max_level: LevelFilter,
    color: bool,
}

impl DemoSubscriber {
    pub fn new(max_level: LevelFilter, color: bool) -> Self {
        Self {
            inner: Default::default(),
            max_level,
            color,
        }
    }

    fn render(&self, event: &Event<'_>, w: &mut String) -> fmt::Result {
        struct Visitor<'a>(&'a mut String);

        impl<'a> Visit for Visitor<'a> {
            fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
                // Writing into a String cannot fail.
                let _ = if field.name() == "message" {
                    write!(self.0, " {:?}", value)
                } else {
                    write!(self.0, " {}={:?}", field.name(), value)
                };
            }
        }

        let level = *event.metadata().level();
        let label = format!("{:>5}", level);
        if self.color {
            match level {
                Level::ERROR => write!(w, "{}", label.red())?,
                Level::WARN => write!(w, "{}", label.yellow())?,
                Level::INFO => write!(w, "{}", label.green())?,
                Level::DEBUG => write!(w, "{}", label.blue())?,
                Level::TRACE => write!(w, "{}", label.purple())?,
            }
        } else {
            w.push_str(&label);
        }

        let inner = self.inner.lock();
        let mut spans = inner.stack.iter();
        if let Some(top) = spans.next() {
            write!(w, " {}", inner.name(top))?;
        }
        for id in spans {
            write!(w, ":{}", inner.name(id))?;
        }
        drop(inner);

        event.record(&mut Visitor(w));
        w.push('\n');
        Ok(())
    }
}

impl Subscriber for DemoSubscriber {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        *metadata.level() <= self.max_level
    }

    fn max_level_hint(&self) -> Option<LevelFilter> {
        Some(self.max_level)
    }

    fn new_span(&self, span: &span::Attributes<'_>) -> span::Id {
        self.inner.lock().open(span.metadata().name())
    }

    fn clone_span(&self, id: &span::Id) -> span::Id {
        if let Some(span) = self.inner.lock().get_mut(id) {
            span.refs += 1;
        }
        id.clone()
    }

    fn try_close(&self, id: span::Id) -> bool {
        self.inner.lock().release(&id)
    }

    fn record(&self, _span: &span::Id, _values: &span::Record<'_>) {}

    fn record_follows_from(&self, _span: &span::Id, _follows: &span::Id) {}

    fn event(&self, event: &Event<'_>) {
        let mut line = String::new();
        if self.render(event, &mut line).is_ok() {
            let _ = io::stderr().lock().write_all(line.as_bytes());
        }
    }

    fn enter(&self, span: &span::Id) {
        self.inner.lock().stack.push(span.clone());
    }

    fn exit(&self, span: &span::Id) {
        let mut inner = self.inner.lock();
        if let Some(i) = inner.stack.iter().rposition(|id| id == span) {
            inner.stack.remove(i);
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    spans: Vec<OwnedSpan>,
    stack: Vec<span::Id>,
    last_id: u64,
}

impl Inner {
    fn open(&mut self, name: &'static str) -> span::Id {
        self.last_id += 1;
        let id = span::Id::from_u64(self.last_id);
        self.spans.push(OwnedSpan {
            id: id.clone(),
            name,
            refs: 1,
        });
        id
    }

    /// Drops one reference to `id`, forgetting the span once none are left.
    fn release(&mut self, id: &span::Id) -> bool {
        let Some(i) = self.spans.iter().position(|span| span.id == *id) else {
            return false;
        };
        let span = &mut self.spans[i];
        span.refs -= 1;
        if span.refs > 0 {
            return false;
        }
        self.spans.swap_remove(i);
        true
    }

    fn get_mut(&mut self, id: &span::Id) -> Option<&mut OwnedSpan> {
        self.spans.iter_mut().find(|span| span.id == *id)
    }

    fn name(&self, id: &span::Id) -> &'static str {
        self.spans
            .iter()
            .find(|span| span.id == *id)
            .map_or("?", |span| span.name)
    }
}

#[derive(Debug)]
struct OwnedSpan {
    id: span::Id,
    name: &'static str,
    refs: usize,
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use super::*;

    #[test]
    fn filters_by_level() {
        let subscriber = DemoSubscriber::new(LevelFilter::INFO, false);
        tracing::subscriber::with_default(subscriber, || {
            assert!(tracing::enabled!(Level::WARN));
            assert!(tracing::enabled!(Level::INFO));
            assert!(!tracing::enabled!(Level::DEBUG));
        });
    }

    #[test]
    fn tracks_span_stack() {
        let subscriber = DemoSubscriber::new(LevelFilter::TRACE, false);
        let outer = subscriber.inner.lock().open("outer");
        let inner = subscriber.inner.lock().open("inner");

        subscriber.enter(&outer);
        subscriber.enter(&inner);
        assert_eq!(subscriber.inner.lock().stack, [outer.clone(), inner.clone()]);

        subscriber.exit(&inner);
        assert_eq!(subscriber.inner.lock().stack, [outer.clone()]);
        assert_eq!(subscriber.inner.lock().name(&outer), "outer");
        subscriber.exit(&outer);
        assert!(subscriber.inner.lock().stack.is_empty());
    }

    #[test]
    fn closed_spans_are_forgotten() {
        let subscriber = DemoSubscriber::new(LevelFilter::TRACE, false);
        let id = subscriber.inner.lock().open("scenario");
        let copy = subscriber.clone_span(&id);

        assert!(!subscriber.try_close(copy));
        assert_eq!(subscriber.inner.lock().name(&id), "scenario");
        assert!(subscriber.try_close(id.clone()));
        assert!(subscriber.inner.lock().spans.is_empty());
        assert_eq!(subscriber.inner.lock().name(&id), "?");
        assert!(!subscriber.try_close(id));
    }

    #[test]
    fn concurrent_spans_keep_their_names() {
        const NAMES: [&str; 4] = ["a", "b", "c", "d"];
        let subscriber = Arc::new(DemoSubscriber::new(LevelFilter::TRACE, false));

        let handles: Vec<_> = NAMES
            .iter()
            .map(|&name| {
                let subscriber = Arc::clone(&subscriber);
                thread::spawn(move || {
                    (0..100)
                        .map(|_| (name, subscriber.inner.lock().open(name)))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut seen = Vec::new();
        for handle in handles {
            for (name, id) in handle.join().unwrap() {
                assert_eq!(subscriber.inner.lock().name(&id), name);
                seen.push(id.into_u64());
            }
        }
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), NAMES.len() * 100);
    }
}
