use crate::PreprocessError;
use nom::bytes::complete::{tag, take_while1};
use nom::character::complete::space1;
use nom::combinator::map_res;
use nom::IResult;

fn parse_version_directive(line: &str) -> IResult<&str, u32> {
    let (input, _) = tag("#version")(line)?;
    let (input, _) = space1(input)?;
    // The optional trailing profile word ("core", "es", ...) is left in
    // the remaining input and ignored.
    let (input, version) = map_res(
        take_while1(|c: char| !c.is_whitespace()),
        str::parse::<u32>,
    )(input)?;
    Ok((input, version))
}

/// Scan shader source text for its declared `#version`.
///
/// Returns `Ok(0)` when the source carries no `#version` directive at all;
/// `0` is reserved for that case, a directive whose version token does not
/// parse as an unsigned integer is a [`PreprocessError`] instead.
pub fn source_version(source: &str) -> Result<u32, PreprocessError> {
    let Some(pos) = source.find("#version") else {
        return Ok(0);
    };
    let line = source[pos..].lines().next().unwrap_or("");
    match parse_version_directive(line) {
        Ok((_, version)) => Ok(version),
        Err(_) => Err(PreprocessError::MalformedVersionDirective(line.to_string())),
    }
}
