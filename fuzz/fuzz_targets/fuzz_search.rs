#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    corpus: &'a str,
    query: &'a str,
}

fuzz_target!(|input: Input<'_>| {
    let index = shakesearch::CorpusIndex::build(input.corpus);
    let folded_corpus = shakesearch::utils::fold_case(input.corpus);
    let folded_query = shakesearch::utils::fold_case(input.query);

    for offset in index.lookup(input.query) {
        assert!(folded_corpus[offset..].starts_with(&folded_query));
    }
});
