// Shorthand for return Err(Id3Error::new(ErrorKind::Foo))
//
// Usage:
// - err!(Variant)          -> return Err(Id3Error::new(ErrorKind::Variant))
// - err!(Variant(Message)) -> return Err(Id3Error::new(ErrorKind::Variant(Message)))
macro_rules! err {
	($variant:ident) => {
		return Err(crate::error::Id3Error::new(
			crate::error::ErrorKind::$variant,
		))
	};
	($variant:ident($reason:literal)) => {
		return Err(crate::error::Id3Error::new(
			crate::error::ErrorKind::$variant($reason),
		))
	};
}

// Shorthand for Id3Error::from(Id3v2Error::new(Id3v2ErrorKind::Foo))
//
// Usage:
//
// - id3v2_err!(Variant)
// - id3v2_err!(Variant(args...))
// - id3v2_err!(Variant { field: value, ... })
//
// or bail:
//
// - id3v2_err!(@BAIL Variant)
// - id3v2_err!(@BAIL Variant(args...))
macro_rules! id3v2_err {
	($variant:ident) => {
		Into::<crate::error::Id3Error>::into(crate::error::Id3v2Error::new(
			crate::error::Id3v2ErrorKind::$variant,
		))
	};
	($variant:ident($($arg:expr),+ $(,)?)) => {
		Into::<crate::error::Id3Error>::into(crate::error::Id3v2Error::new(
			crate::error::Id3v2ErrorKind::$variant($($arg),+),
		))
	};
	($variant:ident { $($field:ident: $value:expr),+ $(,)? }) => {
		Into::<crate::error::Id3Error>::into(crate::error::Id3v2Error::new(
			crate::error::Id3v2ErrorKind::$variant { $($field: $value),+ },
		))
	};
	(@BAIL $($rest:tt)+) => {
		return Err(id3v2_err!($($rest)+))
	};
}

// A macro for handling the different `ParsingMode`s
//
// NOTE: All fields are optional, if `STRICT`, `BESTATTEMPT` or `RELAXED` are missing, it will
// 		 fall through to `DEFAULT`.
//
// Usage:
//
// - parse_mode_choice!(
// 		ident_of_parsing_mode,
// 		STRICT: some_expr,
// 		RELAXED: some_expr,
// 		DEFAULT: some_expr,
// 	 )
macro_rules! parse_mode_choice {
	(
		$parse_mode:ident,
		$(STRICT: $strict_handler:expr,)?
		$(BESTATTEMPT: $best_attempt_handler:expr,)?
		$(RELAXED: $relaxed_handler:expr,)?
		DEFAULT: $default:expr $(,)?
	) => {
		match $parse_mode {
			$(crate::config::ParsingMode::Strict => { $strict_handler },)?
			$(crate::config::ParsingMode::BestAttempt => { $best_attempt_handler },)?
			$(crate::config::ParsingMode::Relaxed => { $relaxed_handler },)?
			#[allow(unreachable_patterns)]
			_ => { $default }
		}
	};
}

pub(crate) use {err, id3v2_err, parse_mode_choice};
