use std::collections::HashMap;

use crate::parser::{ConfigError, OptionEntity};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Lookups over the compiled entities, each value being an offset into the entity list.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Index {
    names: HashMap<String, usize>,
    shorthands: HashMap<char, usize>,
    sequentials: Vec<usize>,
    absorber: Option<usize>,
}

impl Index {
    /// Find an entity by its full name, case-insensitively.
    pub(crate) fn name(&self, name: &str) -> Option<usize> {
        self.names.get(&name.to_lowercase()).copied()
    }

    pub(crate) fn shorthand(&self, shorthand: char) -> Option<usize> {
        self.shorthands.get(&shorthand).copied()
    }

    /// The sequential entities, sorted by their order.
    pub(crate) fn sequentials(&self) -> &[usize] {
        &self.sequentials
    }

    /// The position (within `sequentials`) of the sequential collection, if any.
    pub(crate) fn absorber(&self) -> Option<usize> {
        self.absorber
    }
}

/// Check the invariants across the complete entity list, failing on the first violation.
pub(crate) fn validate<S>(entities: &[OptionEntity<S>]) -> Result<Index, ConfigError> {
    let mut names: HashMap<String, usize> = HashMap::default();
    let mut shorthands: HashMap<char, usize> = HashMap::default();
    let mut orders: HashMap<i32, usize> = HashMap::default();
    let mut collection: Option<usize> = None;

    for (offset, entity) in entities.iter().enumerate() {
        if let Some(existing) = names.insert(entity.full_name().to_lowercase(), offset) {
            return Err(ConfigError(format!(
                "parameters '{}' and '{}' have the same name (names are case-insensitive).",
                entities[existing].full_name(),
                entity.full_name(),
            )));
        }

        for c in entity.shorthand() {
            if let Some(existing) = shorthands.insert(*c, offset) {
                return Err(ConfigError(format!(
                    "parameters '{}' and '{}' both use the shorthand '{c}'.",
                    entities[existing].full_name(),
                    entity.full_name(),
                )));
            }
        }

        if let Some(order) = entity.sequential() {
            if let Some(existing) = orders.insert(order, offset) {
                return Err(ConfigError(format!(
                    "sequential parameters '{}' and '{}' have the same order {order}.",
                    entities[existing].full_name(),
                    entity.full_name(),
                )));
            }

            if entity.is_collection() {
                if let Some(existing) = collection.replace(offset) {
                    return Err(ConfigError(format!(
                        "sequential parameters '{}' and '{}' are both collections (only one is allowed).",
                        entities[existing].full_name(),
                        entity.full_name(),
                    )));
                }
            }
        }
    }

    let mut sequentials: Vec<usize> = orders.into_values().collect();
    sequentials.sort_by_key(|offset| entities[*offset].sequential());
    let mut first_optional: Option<usize> = None;
    let mut absorber: Option<usize> = None;

    for (position, offset) in sequentials.iter().enumerate() {
        let entity = &entities[*offset];

        if let Some(optional) = first_optional {
            if entity.is_mandatory() {
                return Err(ConfigError(format!(
                    "sequential parameter '{}' is optional, so the later sequential parameter '{}' cannot be mandatory.",
                    entities[optional].full_name(),
                    entity.full_name(),
                )));
            }
        } else if !entity.is_mandatory() && !entity.is_collection() {
            first_optional = Some(*offset);
        }

        if let Some(collection_position) = absorber {
            if !entity.is_mandatory() {
                return Err(ConfigError(format!(
                    "sequential parameter '{}' must be mandatory, since it follows the sequential collection '{}'.",
                    entity.full_name(),
                    entities[sequentials[collection_position]].full_name(),
                )));
            }
        } else if entity.is_collection() {
            absorber = Some(position);
        }
    }

    #[cfg(feature = "tracing_debug")]
    {
        debug!(
            "Validated {} parameters: sequentials={sequentials:?}, absorber={absorber:?}.",
            entities.len()
        );
    }

    Ok(Index {
        names,
        shorthands,
        sequentials,
        absorber,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScalarKind;
    use crate::parser::test::BlackHole;
    use crate::parser::OptionConfig;
    use crate::test::assert_contains;
    use rand::seq::SliceRandom;

    fn option(name: &str) -> OptionConfig {
        OptionConfig::new(name, ScalarKind::String, vec![], false, true)
    }

    fn sequential(name: &str, order: i32, mandatory: bool, collection: bool) -> OptionConfig {
        let mut config = OptionConfig::new(name, ScalarKind::String, vec![], collection, true);
        config.sequential = Some(order);
        config.mandatory = mandatory;
        config
    }

    fn entities(configs: Vec<OptionConfig>) -> Vec<OptionEntity<()>> {
        configs
            .into_iter()
            .map(|config| OptionEntity::new(config, Box::new(BlackHole::default())).unwrap())
            .collect()
    }

    #[test]
    fn empty() {
        let index = validate::<()>(&[]).unwrap();
        assert_eq!(index, Index::default());
    }

    #[test]
    fn lookups() {
        // Setup
        let mut foo = option("Foo-Bar");
        foo.shorthand = vec!['a', 'b'];
        let entities = entities(vec![foo, option("val2"), sequential("arg", 1, true, false)]);

        // Execute
        let index = validate(&entities).unwrap();

        // Verify
        assert_eq!(index.name("foo-bar"), Some(0));
        assert_eq!(index.name("FOO-BAR"), Some(0));
        assert_eq!(index.name("VAL2"), Some(1));
        assert_eq!(index.name("arg"), Some(2));
        assert_eq!(index.name("val3"), None);
        assert_eq!(index.shorthand('a'), Some(0));
        assert_eq!(index.shorthand('b'), Some(0));
        assert_eq!(index.shorthand('c'), None);
        assert_eq!(index.sequentials(), &[2]);
        assert_eq!(index.absorber(), None);
    }

    #[test]
    fn duplicate_name() {
        let entities = entities(vec![option("val1"), option("VAL1")]);
        let error = validate(&entities).unwrap_err();
        assert_contains!(error.to_string(), "'val1' and 'VAL1' have the same name");
    }

    #[test]
    fn duplicate_shorthand() {
        let mut left = option("left");
        left.shorthand = vec!['a', 'x'];
        let mut right = option("right");
        right.shorthand = vec!['x'];
        let entities = entities(vec![left, right]);
        let error = validate(&entities).unwrap_err();
        assert_contains!(error.to_string(), "'left' and 'right' both use the shorthand 'x'");
    }

    #[test]
    fn duplicate_order() {
        let entities = entities(vec![
            sequential("one", 1, true, false),
            sequential("two", 2, true, false),
            sequential("three", 2, true, false),
        ]);
        let error = validate(&entities).unwrap_err();
        assert_contains!(error.to_string(), "'two' and 'three' have the same order 2");
    }

    #[test]
    fn duplicate_collection() {
        let entities = entities(vec![
            sequential("one", 1, true, true),
            sequential("two", 2, true, true),
        ]);
        let error = validate(&entities).unwrap_err();
        assert_contains!(error.to_string(), "are both collections");
    }

    #[test]
    fn mandatory_after_optional() {
        let entities = entities(vec![
            sequential("foo", 1, false, false),
            sequential("bar", 2, true, false),
        ]);
        let error = validate(&entities).unwrap_err();
        assert_contains!(
            error.to_string(),
            "'foo' is optional, so the later sequential parameter 'bar' cannot be mandatory"
        );
    }

    #[test]
    fn optional_after_collection() {
        let entities = entities(vec![
            sequential("col", 1, true, true),
            sequential("bar", 2, true, false),
            sequential("baz", 3, false, false),
        ]);
        let error = validate(&entities).unwrap_err();
        assert_contains!(
            error.to_string(),
            "'baz' must be mandatory, since it follows the sequential collection 'col'"
        );
    }

    #[test]
    fn optional_collection_then_mandatory() {
        // Setup
        let entities = entities(vec![
            sequential("arg3", 4, true, false),
            sequential("arg1", 1, true, false),
            sequential("list", 2, false, true),
            sequential("arg2", 3, true, false),
        ]);

        // Execute
        let index = validate(&entities).unwrap();

        // Verify
        assert_eq!(index.sequentials(), &[1, 2, 3, 0]);
        assert_eq!(index.absorber(), Some(1));
    }

    #[test]
    fn sequential_sorting_any_declaration_order() {
        let mut rng = rand::thread_rng();
        let mut orders: Vec<i32> = vec![-5, 0, 3, 10, 42];

        for _ in 0..20 {
            orders.shuffle(&mut rng);
            let entities = entities(
                orders
                    .iter()
                    .map(|order| sequential(&format!("seq{order}"), *order, true, false))
                    .collect(),
            );

            let index = validate(&entities).unwrap();
            let sorted: Vec<i32> = index
                .sequentials()
                .iter()
                .map(|offset| entities[*offset].sequential().unwrap())
                .collect();
            assert_eq!(sorted, vec![-5, 0, 3, 10, 42]);
        }
    }
}
