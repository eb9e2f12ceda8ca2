use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use holdem_rs::cards::{parse_cards, Card};
use holdem_rs::deck::Deck;
use holdem_rs::evaluator::{evaluate_five, evaluate_seven};

fn five(text: &str) -> [Card; 5] {
    parse_cards(text).unwrap().try_into().unwrap()
}

fn bench_evaluate_five(c: &mut Criterion) {
    let mut g = c.benchmark_group("evaluate_five");
    for (name, text) in [
        ("high_card", "A♥ K♦ 7♠ 5♣ 2♦"),
        ("wheel", "A♠ 2♦ 3♣ 4♠ 5♥"),
        ("full_house", "K♥ K♦ K♣ A♠ A♥"),
        ("royal", "A♠ K♠ Q♠ J♠ 10♠"),
    ] {
        let hand = five(text);
        g.bench_with_input(BenchmarkId::new(name, text), &hand, |b, input| {
            b.iter(|| evaluate_five(black_box(input)))
        });
    }
    g.finish();
}

fn bench_evaluate_seven(c: &mut Criterion) {
    let hands: Vec<[Card; 7]> = (0..64u64)
        .map(|seed| {
            let mut deck = Deck::standard();
            deck.shuffle_seeded(seed);
            deck.deal_n(7).try_into().unwrap()
        })
        .collect();
    c.bench_function("evaluate_seven/64_seeded", |b| {
        b.iter(|| {
            for hand in &hands {
                black_box(evaluate_seven(black_box(hand)));
            }
        })
    });
}

criterion_group!(benches, bench_evaluate_five, bench_evaluate_seven);
criterion_main!(benches);
