use std::collections::HashMap;

use pulsegen_core::link::{Link, LinkError, Query};

#[derive(Default, Clone, Copy)]
#[doc(hidden)]
pub struct AuditOption {
    pub broken: bool,
}

#[doc(hidden)]
pub struct Audit {
    option: AuditOption,
    is_open: bool,
    broken: bool,
    fail_at: Option<usize>,
    send_count: usize,
    open_count: usize,
    close_count: usize,
    replies: HashMap<String, String>,
    commands: Vec<String>,
    history: Vec<String>,
}

impl Audit {
    pub fn new(option: AuditOption) -> Self {
        Self {
            option,
            is_open: false,
            broken: option.broken,
            fail_at: None,
            send_count: 0,
            open_count: 0,
            close_count: 0,
            replies: HashMap::from([
                (Query::Func.to_string(), "USER".to_owned()),
                (Query::Volt.to_string(), "+3.000000000000000E+00".to_owned()),
                (
                    Query::VoltOffset.to_string(),
                    "+5.000000000000000E-01".to_owned(),
                ),
            ]),
            commands: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn break_down(&mut self) {
        self.broken = true;
    }

    pub fn repair(&mut self) {
        self.broken = false;
    }

    /// Makes the `index`-th send since creation fail once.
    pub fn fail_at(&mut self, index: usize) {
        self.fail_at = Some(index);
    }

    pub fn set_reply(&mut self, query: Query, reply: impl Into<String>) {
        self.replies.insert(query.to_string(), reply.into());
    }

    /// Commands sent successfully.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Commands and queries sent successfully.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.history.clear();
    }

    pub const fn open_count(&self) -> usize {
        self.open_count
    }

    pub const fn close_count(&self) -> usize {
        self.close_count
    }
}

impl Link for Audit {
    fn open(&mut self) -> Result<(), LinkError> {
        self.is_open = true;
        self.open_count += 1;
        self.broken |= self.option.broken;
        Ok(())
    }

    fn close(&mut self) -> Result<(), LinkError> {
        self.is_open = false;
        self.close_count += 1;
        Ok(())
    }

    fn send(&mut self, command: &str) -> Result<(), LinkError> {
        self.ensure_is_open()?;

        let index = self.send_count;
        self.send_count += 1;
        if self.broken {
            return Err(LinkError::new("broken"));
        }
        if self.fail_at == Some(index) {
            self.fail_at = None;
            return Err(LinkError::new(format!("failed to send {}", command)));
        }

        self.commands.push(command.to_owned());
        self.history.push(command.to_owned());
        Ok(())
    }

    fn query(&mut self, command: &str) -> Result<String, LinkError> {
        self.ensure_is_open()?;

        if self.broken {
            return Err(LinkError::new("broken"));
        }
        let reply = self
            .replies
            .get(command)
            .cloned()
            .ok_or_else(|| LinkError::new(format!("no reply for {}", command)))?;

        self.history.push(command.to_owned());
        Ok(reply)
    }

    fn is_open(&self) -> bool {
        self.is_open
    }
}
