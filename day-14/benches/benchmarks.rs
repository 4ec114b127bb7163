use day_14::{
    formation::{positions_at, spread},
    lobby::Lobby,
    robot::parse_robots,
};

fn main() {
    divan::main();
}

const SAMPLE_INPUT: &str = "\
p=0,4 v=3,-3
p=6,3 v=-1,-3
p=10,3 v=-1,2
p=2,0 v=2,-1
p=0,0 v=1,3
p=3,0 v=-2,-2
p=7,6 v=-1,-3
p=3,0 v=-1,-2
p=9,3 v=2,3
p=7,3 v=-1,2
p=2,4 v=2,-3
p=9,5 v=-3,-3";

fn small_lobby() -> Lobby {
    Lobby::new(11, 7).unwrap()
}

#[divan::bench]
fn part1() {
    day_14::part1::process(divan::black_box(SAMPLE_INPUT), small_lobby(), 100).unwrap();
}

#[divan::bench]
fn part2() {
    day_14::part2::process(divan::black_box(SAMPLE_INPUT), small_lobby()).unwrap();
}

#[divan::bench]
fn formation_spread(bencher: divan::Bencher) {
    let lobby = small_lobby();
    let robots = parse_robots(SAMPLE_INPUT, lobby).unwrap();
    bencher.bench(|| spread(&positions_at(divan::black_box(&robots), lobby, 100)));
}
