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

use clap::Parser;
use idf_writer::run_simulation::{simulate, SimOptions};

fn main() {
    // sidf -i tests/office/office.json5 -w tests/wellington.epw -l tests/office/library.idf -d ./runs
    let options = SimOptions::parse();

    match simulate(&options) {
        Ok(output) => {
            print!("{}", output.report);
            if let Some(idf) = &output.idf_file {
                println!("IDF file: {}", idf.display());
            }
            if let Some(results) = &output.result_file {
                println!("Results: {}", results.display());
            }
        }
        Err(e) => {
            model::print_error("sidf", e);
            std::process::exit(1);
        }
    }
}
