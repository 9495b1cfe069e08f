/*
MIT License
Copyright (c)  Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

use std::path::Path;

/// Characters that, when found in the path of a weather file, make
/// simulation engines fail or misbehave.
pub const ILLEGAL_PATH_CHARACTERS: [char; 6] = ['&', '%', '\'', '^', '=', ','];

/// Checks that a weather file exists, that it is a file and that
/// its path does not contain any of the [`ILLEGAL_PATH_CHARACTERS`].
///
/// ```
/// use weather::check_weather_path;
///
/// assert!(check_weather_path("./some%folder/weather.epw").is_err());
/// ```
pub fn check_weather_path<P: AsRef<Path>>(path: P) -> Result<(), String> {
    let path = path.as_ref();
    let display = path.display().to_string();
    if let Some(c) = display.chars().find(|c| ILLEGAL_PATH_CHARACTERS.contains(c)) {
        return Err(format!(
            "weather file path '{}' contains an illegal character '{}'",
            display, c
        ));
    }
    if !path.exists() {
        return Err(format!("weather file '{}' does not exist", display));
    }
    if !path.is_file() {
        return Err(format!("weather file '{}' is not a file", display));
    }
    Ok(())
}
