#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    corpus: &'a str,
    offset: usize,
    radius: u8,
}

fuzz_target!(|input: Input<'_>| {
    // Any offset, including past the end, must yield an in-bounds slice
    let range = shakesearch::excerpt::bounds(input.corpus.as_bytes(), input.offset, input.radius as usize);
    assert!(range.start <= range.end);
    assert!(range.end <= input.corpus.len());
    let _ = shakesearch::excerpt::extract(input.corpus, input.offset);
});
