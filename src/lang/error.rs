use std::borrow::Cow;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line: Option<usize>,
    message: Cow<'static, str>,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line: None,
            message: Cow::Borrowed(""),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line(&self) -> Option<usize> {
        self.line
    }

    pub fn text(&self) -> &str {
        &self.message
    }

    pub fn in_line(self, line: usize) -> Error {
        debug_assert!(self.line.is_none());
        Error {
            line: Some(line),
            ..self
        }
    }

    pub fn message<T: Into<Cow<'static, str>>>(self, message: T) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            message: message.into(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Break = 0,
    SyntaxError = 2,
    Overflow = 6,
    OutOfMemory = 7,
    InternalError = 51,
    FileNotFound = 53,
    DiskIoError = 57,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self {
            Break => "BREAK",
            SyntaxError => "SYNTAX ERROR",
            Overflow => "OVERFLOW",
            OutOfMemory => "OUT OF MEMORY",
            InternalError => "INTERNAL ERROR",
            FileNotFound => "FILE NOT FOUND",
            DiskIoError => "DISK I/O ERROR",
        };
        write!(f, "{}", code_str)
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Error {
        let code = match error.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::FileNotFound,
            _ => ErrorCode::DiskIoError,
        };
        Error::new(code).message(error.to_string())
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.code)?;
        if let Some(line) = self.line {
            write!(f, " IN LINE {}", line)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}
