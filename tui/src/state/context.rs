use std::time::Instant;

use showcase::{DocumentChat, KnowledgeLevel, Lab, ShowcaseConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Error,
}

/// A one line message shown at the bottom of the screen until the next key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

/// State that outlives any single screen.
pub struct Context {
    pub lab: Lab,
    pub chat: DocumentChat,
    pub level: KnowledgeLevel,
    pub alert: Option<Alert>,
}

impl Context {
    pub fn new(config: &ShowcaseConfig) -> showcase::Result<Self> {
        Ok(Self {
            lab: Lab::new(config)?,
            chat: DocumentChat::new(config.max_upload_bytes),
            level: config.knowledge_level,
            alert: None,
        })
    }

    /// Completes any run whose delay has passed. Should be called once per
    /// frame. A pending error stays on screen until the user acts.
    pub fn tick(&mut self, now: Instant) {
        for algorithm in self.lab.tick(now) {
            if !self.has_error() {
                self.info(format!("{} run complete", algorithm.title()));
            }
        }
    }

    fn has_error(&self) -> bool {
        matches!(
            self.alert,
            Some(Alert {
                kind: AlertKind::Error,
                ..
            })
        )
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.alert = Some(Alert {
            kind: AlertKind::Info,
            message: message.into(),
        });
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.alert = Some(Alert {
            kind: AlertKind::Error,
            message: message.into(),
        });
    }
}

#[cfg(test)]
pub(crate) fn test_context(delay: bool) -> Context {
    let config = ShowcaseConfig {
        seed: Some(1),
        delay,
        ..Default::default()
    };
    Context::new(&config).unwrap()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use synthetic::Algorithm;

    use super::*;

    #[test]
    fn finished_run_reports_when_nothing_is_pending() {
        let mut ctx = test_context(true);
        let start = Instant::now();
        let delay = ctx.lab.start(Algorithm::Svm, start).unwrap();

        ctx.tick(start + delay + Duration::from_millis(1));

        let alert = ctx.alert.as_ref().unwrap();
        assert_eq!(alert.kind, AlertKind::Info);
        assert!(alert.message.contains("run complete"));
    }

    #[test]
    fn finished_run_keeps_a_pending_error() {
        let mut ctx = test_context(true);
        let start = Instant::now();
        let delay = ctx.lab.start(Algorithm::Svm, start).unwrap();
        ctx.error("file not found");

        ctx.tick(start + delay + Duration::from_millis(1));

        let alert = ctx.alert.as_ref().unwrap();
        assert_eq!(alert.kind, AlertKind::Error);
        assert_eq!(alert.message, "file not found");
        assert!(!ctx.lab.session(Algorithm::Svm).is_running());
    }
}
