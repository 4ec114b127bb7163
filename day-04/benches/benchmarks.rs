use day_04::{
    puzzle::{Orientation, WordSearch},
    search::{count_crosses, count_word},
};

fn main() {
    divan::main();
}

const SAMPLE_INPUT: &str = "\
MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX";

/// A 140x140 puzzle, the size of a real input.
fn large_input() -> String {
    (0..140)
        .map(|y| {
            (0..140)
                .map(|x| char::from(b"XMAS"[(x * 7 + y * 3) % 4]))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[divan::bench]
fn part1() {
    day_04::part1::process(divan::black_box(SAMPLE_INPUT), day_04::part1::WORD).unwrap();
}

#[divan::bench]
fn part2() {
    day_04::part2::process(divan::black_box(SAMPLE_INPUT), day_04::part2::WORD).unwrap();
}

#[divan::bench]
fn lines_large(bencher: divan::Bencher) {
    let search = WordSearch::parse(&large_input()).unwrap();
    bencher.bench(|| {
        Orientation::ALL.map(|orientation| divan::black_box(&search).lines(orientation))
    });
}

#[divan::bench]
fn count_word_large(bencher: divan::Bencher) {
    let search = WordSearch::parse(&large_input()).unwrap();
    bencher.bench(|| count_word(divan::black_box(&search), "XMAS").unwrap());
}

#[divan::bench]
fn count_crosses_large(bencher: divan::Bencher) {
    let search = WordSearch::parse(&large_input()).unwrap();
    bencher.bench(|| count_crosses(divan::black_box(&search), "MAS").unwrap());
}
