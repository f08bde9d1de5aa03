/*!
Translation of date/time format patterns into [Moment.js] display patterns.

Each source dialect has its own routine:

* [`icu_to_moment`] translates the [ICU dialect], where repeated letters
encode field width or verbosity (`yyyy` is a four digit year, `MMMM` a full
month name) and single-quoted runs are literal text.
* [`posix_to_moment`] translates the POSIX dialect, where every reserved
character is an independently meaningful single character field code (`Y`
is a four digit year, `i` a zero padded minute) with no quoting syntax at
all.

Both routines are total: they accept any string, never fail, and are pure.
The mapping tables are `const` data, so the routines may be called from any
number of threads without synchronization.

# Lossy by policy

A source token that Moment.js cannot express is dropped from the output,
never reported as an error. For example, the ICU stand-alone month tokens
(`L` through `LLLLL`) have no Moment.js counterpart:

```
use moment_fmt::convert::icu_to_moment;

assert_eq!(icu_to_moment("LLLL yyyy"), " YYYY");
```

Callers must treat a translated pattern as best effort.

# Translation is not idempotent

The output of a translation is a Moment.js pattern, not a pattern in the
source dialect. Feeding it back into a translator reinterprets it under the
source dialect's rules and generally produces something different:

```
use moment_fmt::convert::icu_to_moment;

let moment = icu_to_moment("dd");
assert_eq!(moment, "DD");
// `D` is itself an ICU token (day of year), so re-translating the
// Moment.js pattern does not leave it unchanged.
assert_eq!(icu_to_moment(&moment), "DDDDDD");
```

Translate each source pattern exactly once.

[Moment.js]: https://momentjs.com/docs/#/displaying/
[ICU dialect]: https://unicode.org/reports/tr35/tr35-dates.html#Date_Field_Symbol_Table
*/

pub use self::{icu::icu_to_moment, posix::posix_to_moment};

mod icu;
mod posix;
