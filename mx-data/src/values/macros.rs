/// Define an enumeration over a closed set of tokens
///
/// The first variant is the default.  Each variant's documentation ends with its token.  Parsing
/// rejects unknown tokens with a [`FormatError`](crate::values::FormatError).
///
/// ```
/// mx_data::value_enum! {
/// 	/// Which side
/// 	pub enum Side {
/// 		Left = "left",
/// 		Right = "right",
/// 	}
/// }
///
/// assert_eq!("right".parse::<Side>().unwrap(), Side::Right);
/// assert_eq!(Side::Left.to_string(), "left");
/// assert!("middle".parse::<Side>().is_err());
/// ```
#[macro_export]
macro_rules! value_enum {
	(
		$(#[$meta:meta])*
		$vis:vis enum $name:ident {
			$(#[$first_meta:meta])*
			$first:ident = $first_text:literal
			$(,
				$(#[$variant_meta:meta])*
				$variant:ident = $text:literal
			)*
			$(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
		$vis enum $name {
			$(#[$first_meta])*
			#[doc = concat!("`", $first_text, "`")]
			$first,
			$(
				$(#[$variant_meta])*
				#[doc = concat!("`", $text, "`")]
				$variant,
			)*
		}

		impl $name {
			/// All variants in declaration order
			pub const ALL: &'static [$name] = &[$name::$first, $($name::$variant,)*];

			/// Lexical form of the variant
			pub fn as_str(&self) -> &'static str {
				match self {
					$name::$first => $first_text,
					$($name::$variant => $text,)*
				}
			}
		}

		impl ::std::default::Default for $name {
			fn default() -> Self {
				$name::$first
			}
		}

		impl ::std::fmt::Display for $name {
			fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
				f.write_str(self.as_str())
			}
		}

		impl ::std::str::FromStr for $name {
			type Err = $crate::values::FormatError;

			fn from_str(text: &str) -> ::std::result::Result<Self, Self::Err> {
				match text.trim() {
					$first_text => Ok($name::$first),
					$($text => Ok($name::$variant),)*
					_ => Err($crate::values::FormatError::unknown_token(stringify!($name), text)),
				}
			}
		}
	};
}

/// Define a decimal type, optionally bounded from one side
///
/// ```
/// mx_data::decimal_value! {
/// 	/// Strictly positive amount
/// 	pub struct Amount where value > 0, default 1;
/// }
///
/// assert_eq!("2.50".parse::<Amount>().unwrap().to_string(), "2.5");
/// assert!("0".parse::<Amount>().is_err());
/// assert_eq!(Amount::default().to_string(), "1");
/// ```
#[macro_export]
macro_rules! decimal_value {
	(@impl [$(#[$meta:meta])*] $vis:vis $name:ident, $default:expr, $domain:expr, |$param:ident| $check:block) => {
		$(#[$meta])*
		#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
		$vis struct $name($crate::values::Decimal);

		impl $name {
			/// Wrap a decimal, checking the allowed range
			pub fn new(value: $crate::values::Decimal) -> ::std::result::Result<Self, $crate::values::FormatError> {
				if Self::is_valid(value) {
					Ok(Self(value))
				} else {
					Err($crate::values::FormatError::out_of_range(stringify!($name), value.to_string(), $domain))
				}
			}

			/// Convert from a float, checking the allowed range
			pub fn from_f64(value: f64) -> ::std::result::Result<Self, $crate::values::FormatError> {
				Self::new($crate::values::decimal_from_f64(stringify!($name), value)?)
			}

			/// Wrapped decimal
			pub fn value(&self) -> $crate::values::Decimal {
				self.0
			}

			/// Wrapped decimal as float
			pub fn to_f64(&self) -> f64 {
				$crate::values::decimal_to_f64(self.0)
			}

			fn is_valid($param: $crate::values::Decimal) -> bool $check
		}

		impl ::std::default::Default for $name {
			fn default() -> Self {
				Self($crate::values::Decimal::from($default))
			}
		}

		impl ::std::fmt::Display for $name {
			fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
				f.write_str(&$crate::values::format_decimal(self.0))
			}
		}

		impl ::std::str::FromStr for $name {
			type Err = $crate::values::FormatError;

			fn from_str(text: &str) -> ::std::result::Result<Self, Self::Err> {
				let value = $crate::values::parse_decimal(stringify!($name), text)?;
				Self::new(value).map_err(|e| e.with_text(text))
			}
		}
	};
	($(#[$meta:meta])* $vis:vis struct $name:ident, default $default:literal;) => {
		$crate::decimal_value!(@impl [$(#[$meta])*] $vis $name, $default, "a decimal", |value| {
			let _ = value;
			true
		});
	};
	($(#[$meta:meta])* $vis:vis struct $name:ident where value $op:tt $bound:literal, default $default:literal;) => {
		$crate::decimal_value!(@impl [$(#[$meta])*] $vis $name, $default, concat!("a decimal ", stringify!($op), " ", stringify!($bound)), |value| {
			value $op $crate::values::Decimal::from($bound)
		});
	};
}

/// Define an integer type, optionally bounded
///
/// ```
/// mx_data::integer_value! {
/// 	/// Digit
/// 	pub struct Digit(u8) where 0..=9, default 0;
/// }
///
/// assert_eq!("7".parse::<Digit>().unwrap().value(), 7);
/// assert!("10".parse::<Digit>().is_err());
/// ```
#[macro_export]
macro_rules! integer_value {
	(@impl [$(#[$meta:meta])*] $vis:vis $name:ident($ty:ty), $default:expr, $domain:expr, |$param:ident| $check:block) => {
		$(#[$meta])*
		#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
		$vis struct $name($ty);

		impl $name {
			/// Wrap an integer, checking the allowed range
			pub fn new(value: $ty) -> ::std::result::Result<Self, $crate::values::FormatError> {
				if Self::is_valid(value) {
					Ok(Self(value))
				} else {
					Err($crate::values::FormatError::out_of_range(stringify!($name), value.to_string(), $domain))
				}
			}

			/// Wrapped integer
			pub fn value(&self) -> $ty {
				self.0
			}

			#[allow(unused_comparisons)]
			fn is_valid($param: $ty) -> bool $check
		}

		impl ::std::default::Default for $name {
			fn default() -> Self {
				Self($default)
			}
		}

		impl ::std::fmt::Display for $name {
			fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
				::std::fmt::Display::fmt(&self.0, f)
			}
		}

		impl ::std::str::FromStr for $name {
			type Err = $crate::values::FormatError;

			fn from_str(text: &str) -> ::std::result::Result<Self, Self::Err> {
				let trimmed = text.trim();
				let value = trimmed
					.strip_prefix('+')
					.unwrap_or(trimmed)
					.parse::<$ty>()
					.map_err(|e| $crate::values::FormatError::new(stringify!($name), text, e.to_string()))?;
				Self::new(value).map_err(|e| e.with_text(text))
			}
		}
	};
	($(#[$meta:meta])* $vis:vis struct $name:ident($ty:ty), default $default:literal;) => {
		$crate::integer_value!(@impl [$(#[$meta])*] $vis $name($ty), $default, "an integer", |value| {
			let _ = value;
			true
		});
	};
	($(#[$meta:meta])* $vis:vis struct $name:ident($ty:ty) where $min:literal.., default $default:literal;) => {
		$crate::integer_value!(@impl [$(#[$meta])*] $vis $name($ty), $default, concat!("an integer >= ", stringify!($min)), |value| {
			value >= $min
		});
	};
	($(#[$meta:meta])* $vis:vis struct $name:ident($ty:ty) where $min:literal..=$max:literal, default $default:literal;) => {
		$crate::integer_value!(@impl [$(#[$meta])*] $vis $name($ty), $default, concat!("an integer in ", stringify!($min), "..=", stringify!($max)), |value| {
			value >= $min && value <= $max
		});
	};
}
