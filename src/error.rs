/// An error that can occur in this crate.
///
/// The translator routines in [`convert`](crate::convert) are total
/// functions over strings and never return errors. The one fallible
/// operation is serializing a [`PickerOptions`](crate::PickerOptions)
/// payload to JSON via [`PickerOptions::to_json`](crate::PickerOptions::to_json).
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
}

#[derive(Debug)]
enum ErrorKind {
    Json(serde_json::Error),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.kind {
            ErrorKind::Json(ref err) => {
                write!(f, "failed to serialize picker options: {err}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind {
            ErrorKind::Json(ref err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error { kind: ErrorKind::Json(err) }
    }
}
