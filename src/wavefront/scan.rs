//! nom scanners shared by both formats. Each skips leading whitespace and
//! leaves whatever follows the scanned fields untouched.

use nom::{
	bytes::complete::take_till1,
	character::complete::{ i32 as parse_i32, multispace0 },
	number::complete::float,
	sequence::{ preceded, tuple },
	IResult,
};

/// Longest group or material name kept, in bytes.
pub const MAX_NAME_LEN: usize = 127;

pub fn parse_float(input: &str) -> IResult<&str, f32> {
	preceded(multispace0, float)(input)
}

pub fn parse_int(input: &str) -> IResult<&str, i32> {
	preceded(multispace0, parse_i32)(input)
}

pub fn parse_vector2(input: &str) -> IResult<&str, [f32; 2]> {
	let (input, (u, v)) = tuple((parse_float, parse_float))(input)?;
	Ok((input, [u, v]))
}

pub fn parse_vector3(input: &str) -> IResult<&str, [f32; 3]> {
	let (input, (x, y, z)) = tuple((parse_float, parse_float, parse_float))(input)?;
	Ok((input, [x, y, z]))
}

/// One whitespace-delimited token.
pub fn parse_token(input: &str) -> IResult<&str, &str> {
	preceded(multispace0, take_till1(|c: char| c.is_whitespace()))(input)
}

/// Runs `parser` on `input`, discarding any unconsumed remainder.
pub fn scan<'a, O, F>(mut parser: F, input: &'a str) -> Option<O>
where
	F: FnMut(&'a str) -> IResult<&'a str, O>,
{
	parser(input).ok().map(|(_, output)| output)
}

/// Cuts `token` down to [`MAX_NAME_LEN`] bytes on a char boundary.
pub fn bounded_name(token: &str) -> String {
	let mut end = token.len().min(MAX_NAME_LEN);
	while !token.is_char_boundary(end) {
		end -= 1;
	}
	token[..end].to_owned()
}
