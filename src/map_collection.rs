//! Map-shaped generators: fixed-schema maps, optional fields, and
//! variable-size key/value maps.

use std::collections::HashMap;
use std::hash::Hash;

use crate::generator::Generator;
use crate::seed::Seed;
use crate::size::Size;
use crate::string::{atom, Atom};
use crate::tree::{ChildIter, LazyTree};

/// A map with a fixed, known set of keys, each generated independently from
/// its own value generator — the record/struct-shaped case.
pub fn fixed_map<K, V>(fields: Vec<(K, Box<dyn Generator<Item = V>>)>) -> FixedMap<K, V> {
    FixedMap { fields }
}

pub struct FixedMap<K, V> {
    fields: Vec<(K, Box<dyn Generator<Item = V>>)>,
}

impl<K, V> Generator for FixedMap<K, V>
where
    K: Clone + Eq + Hash + 'static,
    V: Clone + 'static,
{
    type Item = HashMap<K, V>;

    fn generate(&self, seed: Seed, size: Size) -> LazyTree<HashMap<K, V>> {
        let seeds = seed.split_n(self.fields.len());
        let trees: Vec<(K, LazyTree<V>)> = self
            .fields
            .iter()
            .zip(seeds)
            .map(|((key, generator), s)| (key.clone(), generator.generate(s, size)))
            .collect();
        fixed_map_tree(trees)
    }
}

fn fixed_map_tree<K, V>(trees: Vec<(K, LazyTree<V>)>) -> LazyTree<HashMap<K, V>>
where
    K: Clone + Eq + Hash + 'static,
    V: Clone + 'static,
{
    let root: HashMap<K, V> =
        trees.iter().map(|(k, t)| (k.clone(), t.root().clone())).collect();
    LazyTree::new(root, move || {
        let trees = trees.clone();
        let len = trees.len();
        Box::new((0..len).flat_map(move |index| {
            let trees = trees.clone();
            let (_, value_tree) = &trees[index];
            let children: Vec<_> = value_tree.children().collect();
            children.into_iter().map(move |child| {
                let mut replaced = trees.clone();
                replaced[index].1 = child;
                fixed_map_tree(replaced)
            })
        }))
    })
}

/// A map where `required` keys always appear and each `optional` key is
/// independently included or dropped — the "struct with `Option` fields"
/// shape, generalized to arbitrary key types the way [`fixed_map`] does.
/// Shrinking first drops included optional keys one at a time, then shrinks
/// the values that remain, mirroring `collection::list_of`'s two-phase
/// shrink (drop elements, then shrink the survivors).
pub fn optional_map<K, V>(
    required: Vec<(K, Box<dyn Generator<Item = V>>)>,
    optional: Vec<(K, Box<dyn Generator<Item = V>>)>,
) -> OptionalMap<K, V> {
    OptionalMap { required, optional }
}

pub struct OptionalMap<K, V> {
    required: Vec<(K, Box<dyn Generator<Item = V>>)>,
    optional: Vec<(K, Box<dyn Generator<Item = V>>)>,
}

impl<K, V> Generator for OptionalMap<K, V>
where
    K: Clone + Eq + Hash + 'static,
    V: Clone + 'static,
{
    type Item = HashMap<K, V>;

    fn generate(&self, seed: Seed, size: Size) -> LazyTree<HashMap<K, V>> {
        let (required_seed, rest_seed) = seed.split();
        let required_seeds = required_seed.split_n(self.required.len());
        let mut trees: Vec<(K, LazyTree<V>)> = self
            .required
            .iter()
            .zip(required_seeds)
            .map(|((key, generator), s)| (key.clone(), generator.generate(s, size)))
            .collect();
        let required_len = trees.len();

        let (include_seed, value_seed) = rest_seed.split();
        let include_seeds = include_seed.split_n(self.optional.len());
        let value_seeds = value_seed.split_n(self.optional.len());
        for ((key, generator), (inc_seed, val_seed)) in
            self.optional.iter().zip(include_seeds.into_iter().zip(value_seeds))
        {
            if inc_seed.uniform_in_range(0, 1) == 1 {
                trees.push((key.clone(), generator.generate(val_seed, size)));
            }
        }
        optional_map_tree(trees, required_len)
    }
}

fn optional_map_tree<K, V>(
    trees: Vec<(K, LazyTree<V>)>,
    required_len: usize,
) -> LazyTree<HashMap<K, V>>
where
    K: Clone + Eq + Hash + 'static,
    V: Clone + 'static,
{
    let root: HashMap<K, V> = trees.iter().map(|(k, t)| (k.clone(), t.root().clone())).collect();
    LazyTree::new(root, move || {
        let len = trees.len();
        let dropped = trees.clone();
        let drop_children = (required_len..len).map(move |index| {
            let mut remaining = dropped.clone();
            remaining.remove(index);
            optional_map_tree(remaining, required_len)
        });

        let shrunk = trees.clone();
        let value_children = (0..len).flat_map(move |index| {
            let shrunk = shrunk.clone();
            let (_, value_tree) = &shrunk[index];
            let children: Vec<_> = value_tree.children().collect();
            children.into_iter().map(move |child| {
                let mut replaced = shrunk.clone();
                replaced[index].1 = child;
                optional_map_tree(replaced, required_len)
            })
        });

        Box::new(drop_children.chain(value_children)) as ChildIter<HashMap<K, V>>
    })
}

/// A variable-size `HashMap<K, V>` of length in `[min_len, max_len]`, built
/// by zipping independently generated key and value lists — matching
/// `atom`-keyed maps (Elixir's most common "map of" shape) when `K = String`
/// via [`keyword_of`].
pub fn map_of<K, V, KG, VG>(
    key: KG,
    value: VG,
    min_len: usize,
    max_len: Option<usize>,
) -> MapOf<KG, VG>
where
    KG: Generator<Item = K>,
    VG: Generator<Item = V>,
{
    MapOf { key, value, min_len, max_len }
}

pub struct MapOf<KG, VG> {
    key: KG,
    value: VG,
    min_len: usize,
    max_len: Option<usize>,
}

impl<K, V, KG, VG> Generator for MapOf<KG, VG>
where
    K: Clone + Eq + Hash + 'static,
    V: Clone + 'static,
    KG: Generator<Item = K>,
    VG: Generator<Item = V>,
{
    type Item = HashMap<K, V>;

    fn generate(&self, seed: Seed, size: Size) -> LazyTree<HashMap<K, V>> {
        let (key_seed, value_seed) = seed.split();
        let upper = self.max_len.unwrap_or(self.min_len + size.get() as usize).max(self.min_len);
        let len_seed = key_seed;
        let len = if upper <= self.min_len {
            self.min_len
        } else {
            len_seed.uniform_in_range(self.min_len as i128, upper as i128) as usize
        };
        let key_seeds = key_seed.split_n(len);
        let value_seeds = value_seed.split_n(len);
        let mut seen = std::collections::HashSet::new();
        let mut pairs = Vec::with_capacity(len);
        for (ks, vs) in key_seeds.into_iter().zip(value_seeds) {
            let key_tree = self.key.generate(ks, size);
            if seen.insert(key_tree.root().clone()) {
                let value_tree = self.value.generate(vs, size);
                pairs.push((key_tree.into_root(), value_tree));
            }
        }
        fixed_map_tree(pairs)
    }
}

/// A `HashMap<String, V>` whose keys are identifier-shaped atoms, the
/// Elixir-flavoured "keyword list as map" shape.
pub fn keyword_of<V, VG>(value: VG, min_len: usize, max_len: Option<usize>) -> MapOf<Atom, VG>
where
    VG: Generator<Item = V>,
{
    map_of(atom(8), value, min_len, max_len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::constant;
    use crate::primitive::integer_in_range;

    #[test]
    fn fixed_map_has_exactly_the_declared_keys() {
        let gen = fixed_map(vec![
            ("a".to_string(), Box::new(constant(1)) as Box<dyn Generator<Item = i32>>),
            ("b".to_string(), Box::new(integer_in_range(0..=9))),
        ]);
        let tree = gen.generate(Seed::new_seed(1), Size::new(5));
        let map = tree.root();
        assert_eq!(map.len(), 2);
        assert!(map.contains_key("a"));
        assert!(map.contains_key("b"));
    }

    #[test]
    fn optional_map_always_keeps_required_keys() {
        let gen = optional_map(
            vec![("id".to_string(), Box::new(constant(1)) as Box<dyn Generator<Item = i32>>)],
            vec![("nickname".to_string(), Box::new(integer_in_range(0..=9)))],
        );
        for i in 0..50u64 {
            let tree = gen.generate(Seed::new_seed(i), Size::new(5));
            assert!(tree.root().contains_key("id"));
        }
    }

    #[test]
    fn optional_map_shrinks_by_dropping_optional_keys_first() {
        let gen = optional_map(
            vec![("id".to_string(), Box::new(constant(1)) as Box<dyn Generator<Item = i32>>)],
            vec![("nickname".to_string(), Box::new(integer_in_range(0..=9)))],
        );
        for i in 0..50u64 {
            let tree = gen.generate(Seed::new_seed(i), Size::new(5));
            if tree.root().contains_key("nickname") {
                let children: Vec<_> = tree.children().collect();
                assert!(!children.is_empty());
                // The first shrink offered drops the optional key entirely.
                assert!(!children[0].root().contains_key("nickname"));
                return;
            }
        }
        panic!("no seed included the optional key in 50 tries");
    }

    #[test]
    fn map_of_respects_length_bounds() {
        let gen = map_of(integer_in_range(0..=100), integer_in_range(0..=9), 0, Some(5));
        let tree = gen.generate(Seed::new_seed(2), Size::new(10));
        assert!(tree.root().len() <= 5);
    }
}
