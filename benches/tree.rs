extern crate rbindex;

use criterion::{Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;

fn insert(c: &mut Criterion) {
    c.bench_function("rbindex_insert_ascending", |b| {
        b.iter(|| {
            let mut tree = rbindex::RBTree::<usize>::new();
            for k in 0..1000 {
                tree.insert(k);
            }
            tree
        })
    });
    c.bench_function("rbtree_insert_ascending", |b| {
        b.iter(|| {
            let mut tree = rbtree::RBTree::<usize, ()>::new();
            for k in 0..1000 {
                tree.insert(k, ());
            }
            tree
        })
    });

    let mut keys: Vec<usize> = (0..1000).collect();
    keys.shuffle(&mut ChaCha8Rng::seed_from_u64(7));
    c.bench_function("rbindex_insert_shuffled", |b| {
        b.iter(|| {
            let mut tree = rbindex::RBTree::<usize>::new();
            for k in keys.iter() {
                tree.insert(*k);
            }
            tree
        })
    });
}

criterion_group!(benches, insert);
criterion_main!(benches);
