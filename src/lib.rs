/*!
Translation of date/time format patterns into [Moment.js] display patterns,
and construction of the client option payloads consumed by date-time picker
widgets.

Two source pattern dialects are supported, each with its own routine in the
[`convert`] module:

* The **ICU dialect**, where repeated letters encode field width (`yyyy`,
`MMMM`) and single-quoted runs are literal text. See
[`convert::icu_to_moment`].
* The **POSIX dialect**, where every reserved character is an independently
meaningful single character field code (`Y-m-d`). See
[`convert::posix_to_moment`].

Translation is lossy by policy: a source token that Moment.js cannot express
is silently dropped from the output, never reported as an error. Callers
should treat a translated pattern as best effort. See the [`convert`] module
docs for details, including why translation is not idempotent.

# Example

This shows how to translate a date pattern from each dialect:

```
use moment_fmt::convert::{icu_to_moment, posix_to_moment};

assert_eq!(icu_to_moment("yyyy-MM-dd"), "YYYY-MM-DD");
assert_eq!(posix_to_moment("Y-m-d H:i:s"), "YYYY-MM-DD HH:mm:ss");
```

And this shows how to build a widget configuration payload, where the
`format` option declares its dialect with a marker prefix:

```
use moment_fmt::PickerOptions;

let options = PickerOptions::new("en-US").format("icu:dd.MM.yyyy");
assert_eq!(
    options.to_json()?,
    r#"{"format":"DD.MM.YYYY","locale":"en"}"#,
);

# Ok::<(), moment_fmt::Error>(())
```

# Crate features

* **logging** -
  Enables some trace and debug level logging via the [`log`] crate. The
  most useful messages record which source tokens were dropped during a
  translation. This never changes behavior.

[Moment.js]: https://momentjs.com/docs/#/displaying/
[`log`]: https://docs.rs/log
*/

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub use crate::{error::Error, picker::PickerOptions};

#[macro_use]
mod logging;

pub mod convert;
mod error;
mod picker;
