//! Options that control how feed files are loaded.

/// What to do with a data record that fails to tokenize or coerce.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum RowErrorPolicy {
    /// Stop at the first invalid record and report it.
    #[default]
    Abort,
    /// Log the invalid record, count it and keep going.
    SkipAndLog,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    pub on_row_error: RowErrorPolicy,
    /// Also reject records whose conditionally required fields can be checked locally and fail.
    pub check_conditionally_required: bool,
    /// Drop a UTF-8 byte order mark at the start of a file.
    pub strip_bom: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            on_row_error: RowErrorPolicy::Abort,
            check_conditionally_required: false,
            strip_bom: true,
        }
    }
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_row_error(mut self, policy: RowErrorPolicy) -> Self {
        self.on_row_error = policy;
        self
    }

    pub fn skip_invalid_rows(self) -> Self {
        self.on_row_error(RowErrorPolicy::SkipAndLog)
    }

    pub fn check_conditionally_required(mut self, check: bool) -> Self {
        self.check_conditionally_required = check;
        self
    }

    pub fn strip_bom(mut self, strip: bool) -> Self {
        self.strip_bom = strip;
        self
    }
}
