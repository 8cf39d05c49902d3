use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ccgchart::{build_derivation, label_tree, Dialect, Dictionary, ParseTree, SimpleFormat};

const TREE_SRC: &str = "(<T S[dcl] 0 2> (<T S[dcl] 1 2> (<T NP 0 2> (<T NP 0 1> (<T N 1 2> \
  (<L N/N NNP NNP Pierre N_73/N_73>) (<L N NNP NNP Vinken N>) ) ) (<T NP\\NP 0 1> \
  (<T S[adj]\\NP 1 2> \
  (<T NP 0 1> (<T N 1 2> (<L N/N CD CD 61 N_93/N_93>) (<L N NNS NNS years N>) ) ) \
  (<L (S[adj]\\NP)\\NP JJ JJ old (S[adj]\\NP_83)\\NP_84>) ) ) ) (<T S[dcl]\\NP 0 2> \
  (<L (S[dcl]\\NP)/(S[b]\\NP) MD MD will (S[dcl]\\NP_10)/(S[b]_11\\NP_10:B)_11>) \
  (<T S[b]\\NP 0 2> (<L (S[b]\\NP)/NP VB VB join (S[b]\\NP_20)/NP_21>) (<T NP 1 2> \
  (<L NP[nb]/N DT DT the NP[nb]_29/N_29>) (<L N NN NN board N>) ) ) ) ) (<L . . . . .>) )";

fn convert(raw: &ParseTree<String>, dict: &mut Dictionary) -> usize {
  let tree = label_tree(raw, &SimpleFormat, dict).unwrap();
  build_derivation(&tree).unwrap().num_entries()
}

fn criterion_benchmark(c: &mut Criterion) {
  let raw = Dialect::Simple.read_tree(TREE_SRC).unwrap();
  let mut dict = Dictionary::new();

  c.bench_function("read tree", |b| {
    b.iter(|| Dialect::Simple.read_tree(black_box(TREE_SRC)).unwrap())
  });

  c.bench_function("label and derive", |b| {
    b.iter(|| convert(black_box(&raw), &mut dict))
  });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
