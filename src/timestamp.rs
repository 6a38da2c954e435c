//! Cue timestamp rendering shared by the SRT and WebVTT encoders.
//!
//! Both formats use `HH:MM:SS<sep>mmm`; only the millisecond separator differs. Hours are
//! zero-padded to at least two digits and are never wrapped at 24, so long media simply grows
//! the hour field.

/// Format seconds as an SRT timestamp (`HH:MM:SS,mmm`).
pub fn srt_timestamp(seconds: f64) -> String {
    format_timestamp(seconds, ',')
}

/// Format seconds as a WebVTT timestamp (`HH:MM:SS.mmm`).
pub fn vtt_timestamp(seconds: f64) -> String {
    format_timestamp(seconds, '.')
}

/// Decompose `seconds` with floored division and render it.
///
/// Nothing is validated: negative inputs render whatever the arithmetic yields
/// (`-1.0` becomes `-1:59:59.000`). The seconds field is rounded to three decimals on its own,
/// so `59.9996` renders as `60.000` rather than carrying into the minutes.
fn format_timestamp(seconds: f64, sep: char) -> String {
    if !seconds.is_finite() {
        return format!("00:00:00{sep}000");
    }

    let (hours, rem_hour) = div_mod_floor(seconds, 3600.0);
    let (minutes, _) = div_mod_floor(rem_hour, 60.0);
    let (_, secs) = div_mod_floor(seconds, 60.0);

    let hours = hours as i64;
    let minutes = minutes as i64;

    let secs = format!("{secs:06.3}");
    let secs = if sep == '.' {
        secs
    } else {
        secs.replace('.', &sep.to_string())
    };

    format!("{hours:02}:{minutes:02}:{secs}")
}

/// Floored division and modulo for floats.
///
/// The remainder takes the sign of the divisor and the quotient is corrected so that
/// `quotient * y + remainder == x` holds as closely as floats allow. Computing the quotient
/// from `x - remainder` (instead of `(x / y).floor()`) keeps values just below a multiple of
/// `y` from rounding up into the next hour or minute.
fn div_mod_floor(x: f64, y: f64) -> (f64, f64) {
    let mut rem = x % y;
    let mut div = (x - rem) / y;

    if rem != 0.0 {
        if (y < 0.0) != (rem < 0.0) {
            rem += y;
            div -= 1.0;
        }
    } else {
        rem = 0.0_f64.copysign(y);
    }

    let quotient = if div != 0.0 {
        let floor = div.floor();
        if div - floor > 0.5 { floor + 1.0 } else { floor }
    } else {
        0.0_f64.copysign(x / y)
    };

    (quotient, rem)
}
