use std::process::ExitStatus;

/// How the wrapped tool terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessResult {
    code: Option<i32>,
    signal: Option<i32>,
}

impl ProcessResult {
    pub fn new(code: Option<i32>, signal: Option<i32>) -> Self {
        Self { code, signal }
    }

    pub fn from_status(status: ExitStatus) -> Self {
        #[cfg(unix)]
        let signal = {
            use std::os::unix::process::ExitStatusExt;
            status.signal()
        };
        #[cfg(not(unix))]
        let signal = None;

        Self {
            code: status.code(),
            signal,
        }
    }

    /// Exit code, if the process exited normally.
    pub fn code(&self) -> Option<i32> {
        self.code
    }

    /// Terminating signal, if the process was killed.
    pub fn signal(&self) -> Option<i32> {
        self.signal
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Code to replay as our own exit status.
    ///
    /// The child's code verbatim, or `128 + signal` the way shells report a
    /// killed process.
    pub fn exit_code(&self) -> i32 {
        match (self.code, self.signal) {
            (Some(code), _) => code,
            (None, Some(signal)) => 128 + signal,
            (None, None) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_exit_code() {
        let result = ProcessResult::new(Some(5), None);
        assert!(!result.success());
        assert_eq!(result.exit_code(), 5);
    }

    #[test]
    fn zero_is_success() {
        assert!(ProcessResult::new(Some(0), None).success());
    }

    #[test]
    fn signal_maps_to_shell_convention() {
        let result = ProcessResult::new(None, Some(9));
        assert_eq!(result.exit_code(), 137);
        assert_eq!(result.signal(), Some(9));
    }
}
