//! Resolves a command line against the compiled entities.
//!
//! In a shorthand cluster, each parameterized shorthand takes the next whole token as its value and the cluster carries on.
//! So `-ab x y` assigns `x` to `-a` and `y` to `-b`.

use std::collections::HashSet;

use crate::parser::{distribute, CommandLineError, Index, MakeError, OptionEntity};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

pub(crate) struct Resolver<'r, S> {
    entities: &'r [OptionEntity<S>],
    index: &'r Index,
}

impl<'r, S: Default> Resolver<'r, S> {
    pub(crate) fn new(entities: &'r [OptionEntity<S>], index: &'r Index) -> Self {
        Self { entities, index }
    }

    /// Resolve the tokens into a fresh `S`, then run the constraint checks.
    pub(crate) fn consume(&self, tokens: &[&str]) -> Result<S, MakeError> {
        let mut session = Session::new(self.entities, self.index);
        let mut free: Vec<&str> = Vec::default();
        let mut i = 0;

        while i < tokens.len() {
            let token = tokens[i];

            if let Some(option) = token.strip_prefix("--") {
                let (key, inline) = match option.split_once('=') {
                    Some((_, "")) => {
                        return Err(CommandLineError::EmptyAssignment(token.to_string()).into());
                    }
                    Some((key, value)) => (key, Some(value)),
                    None => (option, None),
                };
                let offset = self
                    .index
                    .name(key)
                    .ok_or_else(|| CommandLineError::UnknownOption(token.to_string()))?;
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Token #{i} '{token}' matches option '{key}'.");
                }

                let value = match inline {
                    Some(value) => Some(value),
                    None if self.entities[offset].is_parameterized() => {
                        Some(next_value(tokens, &mut i, &format!("--{key}"))?)
                    }
                    None => None,
                };
                session.handle(offset, value)?;
            } else if let Some(cluster) = token.strip_prefix('-') {
                for shorthand in cluster.chars() {
                    let offset = self.index.shorthand(shorthand).ok_or_else(|| {
                        CommandLineError::UnknownShorthand {
                            shorthand,
                            token: token.to_string(),
                        }
                    })?;
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Token #{i} '{token}' matches shorthand '{shorthand}'.");
                    }

                    // Each parameterized shorthand in the cluster takes the next whole token.
                    let value = if self.entities[offset].is_parameterized() {
                        Some(next_value(tokens, &mut i, &format!("-{shorthand}"))?)
                    } else {
                        None
                    };
                    session.handle(offset, value)?;
                }
            } else {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Token #{i} '{token}' is free-standing.");
                }
                free.push(token);
            }

            i += 1;
        }

        let sequentials = self.index.sequentials();

        for (position, token) in distribute(sequentials.len(), self.index.absorber(), &free)? {
            session.handle(sequentials[position], Some(token))?;
        }

        session.finish()
    }
}

fn next_value<'t>(tokens: &[&'t str], i: &mut usize, option: &str) -> Result<&'t str, CommandLineError> {
    match tokens.get(*i + 1) {
        Some(next) if !next.starts_with('-') => {
            *i += 1;
            Ok(next)
        }
        _ => Err(CommandLineError::MissingValue(option.to_string())),
    }
}

struct Session<'r, S> {
    entities: &'r [OptionEntity<S>],
    index: &'r Index,
    target: S,
    used: HashSet<usize>,
}

impl<'r, S: Default> Session<'r, S> {
    fn new(entities: &'r [OptionEntity<S>], index: &'r Index) -> Self {
        Self {
            entities,
            index,
            target: S::default(),
            used: HashSet::default(),
        }
    }

    fn handle(&mut self, offset: usize, value: Option<&str>) -> Result<(), MakeError> {
        self.entities[offset].capture(&mut self.target, value)?;
        self.used.insert(offset);
        Ok(())
    }

    fn finish(self) -> Result<S, MakeError> {
        self.check_mandatory()?;
        self.check_excludes()?;
        self.check_excludes_group()?;
        self.check_requires()?;
        self.check_mandatory_if()?;
        self.check_mandatory_if_not()?;
        Ok(self.target)
    }

    fn is_used(&self, name: &str) -> Option<usize> {
        self.index
            .name(name)
            .filter(|offset| self.used.contains(offset))
    }

    fn used_entities(&self) -> impl Iterator<Item = (usize, &OptionEntity<S>)> {
        self.entities
            .iter()
            .enumerate()
            .filter(|(offset, _)| self.used.contains(offset))
    }

    fn unused_entities(&self) -> impl Iterator<Item = (usize, &OptionEntity<S>)> {
        self.entities
            .iter()
            .enumerate()
            .filter(|(offset, _)| !self.used.contains(offset))
    }

    fn check_mandatory(&self) -> Result<(), CommandLineError> {
        match self.unused_entities().find(|(_, entity)| entity.is_mandatory()) {
            Some((_, entity)) => Err(CommandLineError::MissingMandatory(
                entity.full_name().to_string(),
            )),
            None => Ok(()),
        }
    }

    fn check_excludes(&self) -> Result<(), CommandLineError> {
        for (offset, entity) in self.used_entities() {
            for name in entity.excludes() {
                match self.is_used(name) {
                    Some(other) if other != offset => {
                        return Err(CommandLineError::Excluded {
                            excluded: self.entities[other].full_name().to_string(),
                            by: entity.full_name().to_string(),
                        });
                    }
                    _ => {}
                }
            }
        }

        Ok(())
    }

    fn check_excludes_group(&self) -> Result<(), CommandLineError> {
        for (offset, entity) in self.used_entities() {
            for group in entity.excludes_group() {
                let collision = self
                    .used_entities()
                    .find(|(other, e)| *other != offset && e.excludes_group().contains(group));

                if let Some((_, other)) = collision {
                    return Err(CommandLineError::GroupExcluded {
                        excluded: other.full_name().to_string(),
                        by: entity.full_name().to_string(),
                        group: group.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    fn check_requires(&self) -> Result<(), CommandLineError> {
        for (_, entity) in self.used_entities() {
            for name in entity.requires() {
                // A name which matches nothing cannot be supplied, so is not enforced.
                if let Some(required) = self.index.name(name) {
                    if !self.used.contains(&required) {
                        return Err(CommandLineError::Requires {
                            by: entity.full_name().to_string(),
                            required: self.entities[required].full_name().to_string(),
                        });
                    }
                }
            }
        }

        Ok(())
    }

    fn check_mandatory_if(&self) -> Result<(), CommandLineError> {
        for (_, entity) in self.unused_entities() {
            if let Some(trigger) = entity.mandatory_if().iter().find_map(|n| self.is_used(n)) {
                return Err(CommandLineError::MandatoryIf {
                    name: entity.full_name().to_string(),
                    trigger: self.entities[trigger].full_name().to_string(),
                });
            }
        }

        Ok(())
    }

    fn check_mandatory_if_not(&self) -> Result<(), CommandLineError> {
        for (_, entity) in self.unused_entities() {
            let alternatives = entity.mandatory_if_not();

            if !alternatives.is_empty() && alternatives.iter().all(|n| self.is_used(n).is_none()) {
                return Err(CommandLineError::MandatoryIfNot {
                    name: entity.full_name().to_string(),
                    alternatives: alternatives.to_vec(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ValueError;
    use crate::model::ScalarKind;
    use crate::parser::test::Recorder;
    use crate::parser::{validate, OptionConfig};
    use rstest::rstest;

    struct Fixture {
        entities: Vec<OptionEntity<()>>,
        index: Index,
        recorders: Vec<Recorder>,
    }

    impl Fixture {
        fn new(configs: Vec<OptionConfig>) -> Self {
            let mut recorders = Vec::default();
            let entities: Vec<OptionEntity<()>> = configs
                .into_iter()
                .map(|config| {
                    let recorder = Recorder::default();
                    recorders.push(recorder.clone());
                    OptionEntity::new(config, Box::new(recorder)).unwrap()
                })
                .collect();
            let index = validate(&entities).unwrap();
            Self {
                entities,
                index,
                recorders,
            }
        }

        fn consume(&self, tokens: &[&str]) -> Result<(), MakeError> {
            Resolver::new(&self.entities, &self.index).consume(tokens)
        }

        fn captures(&self, offset: usize) -> Vec<Option<String>> {
            self.recorders[offset].captures.lock().unwrap().clone()
        }
    }

    fn option(name: &str) -> OptionConfig {
        OptionConfig::new(name, ScalarKind::String, vec![], false, true)
    }

    fn switch(name: &str) -> OptionConfig {
        OptionConfig::new(name, ScalarKind::Boolean, vec![], false, false)
    }

    fn short(mut config: OptionConfig, shorthand: char) -> OptionConfig {
        config.shorthand.push(shorthand);
        config
    }

    fn sequential(name: &str, order: i32, mandatory: bool, collection: bool) -> OptionConfig {
        let mut config = OptionConfig::new(name, ScalarKind::String, vec![], collection, true);
        config.sequential = Some(order);
        config.mandatory = mandatory;
        config
    }

    fn some(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[test]
    fn empty() {
        let fixture = Fixture::new(vec![]);
        fixture.consume(&[]).unwrap();
    }

    #[rstest]
    #[case(vec!["--name", "value"])]
    #[case(vec!["--name=value"])]
    #[case(vec!["--NAME", "value"])]
    #[case(vec!["--Name=value"])]
    #[case(vec!["-n", "value"])]
    fn option_value(#[case] tokens: Vec<&str>) {
        // Setup
        let fixture = Fixture::new(vec![short(option("name"), 'n')]);

        // Execute
        fixture.consume(&tokens).unwrap();

        // Verify
        assert_eq!(fixture.captures(0), vec![some("value")]);
    }

    #[test]
    fn option_value_with_equals() {
        let fixture = Fixture::new(vec![option("name")]);
        fixture.consume(&["--name=a=b"]).unwrap();
        assert_eq!(fixture.captures(0), vec![some("a=b")]);
    }

    #[test]
    fn option_empty_assignment() {
        let fixture = Fixture::new(vec![option("name")]);
        assert_eq!(
            fixture.consume(&["--name="]).unwrap_err(),
            MakeError::CommandLine(CommandLineError::EmptyAssignment("--name=".to_string()))
        );
    }

    #[rstest]
    #[case(vec!["--name"])]
    #[case(vec!["--name", "--other"])]
    #[case(vec!["--name", "-o"])]
    fn option_missing_value(#[case] tokens: Vec<&str>) {
        let fixture = Fixture::new(vec![option("name"), short(switch("other"), 'o')]);
        assert_eq!(
            fixture.consume(&tokens).unwrap_err(),
            MakeError::CommandLine(CommandLineError::MissingValue("--name".to_string()))
        );
    }

    #[rstest]
    #[case(vec!["--unknown"], CommandLineError::UnknownOption("--unknown".to_string()))]
    #[case(vec!["--"], CommandLineError::UnknownOption("--".to_string()))]
    #[case(vec!["-q"], CommandLineError::UnknownShorthand { shorthand: 'q', token: "-q".to_string() })]
    #[case(vec!["-fq"], CommandLineError::UnknownShorthand { shorthand: 'q', token: "-fq".to_string() })]
    fn unknown(#[case] tokens: Vec<&str>, #[case] expected: CommandLineError) {
        let fixture = Fixture::new(vec![short(switch("flag"), 'f')]);
        assert_eq!(
            fixture.consume(&tokens).unwrap_err(),
            MakeError::CommandLine(expected)
        );
    }

    #[test]
    fn switch_presence() {
        let fixture = Fixture::new(vec![switch("flag"), short(switch("other"), 'o')]);
        fixture.consume(&["--flag", "-o"]).unwrap();
        assert_eq!(fixture.captures(0), vec![None]);
        assert_eq!(fixture.captures(1), vec![None]);
    }

    #[test]
    fn switch_explicit() {
        let fixture = Fixture::new(vec![switch("flag")]);
        fixture.consume(&["--flag=off"]).unwrap();
        assert_eq!(fixture.captures(0), vec![some("off")]);
    }

    #[test]
    fn shorthand_cluster() {
        // Setup
        let fixture = Fixture::new(vec![
            short(switch("x"), 'x'),
            short(switch("y"), 'y'),
            short(option("b"), 'b'),
        ]);

        // Execute
        fixture.consume(&["-xyb", "value"]).unwrap();

        // Verify
        assert_eq!(fixture.captures(0), vec![None]);
        assert_eq!(fixture.captures(1), vec![None]);
        assert_eq!(fixture.captures(2), vec![some("value")]);
    }

    #[test]
    fn shorthand_cluster_continues_after_value() {
        // Setup
        let fixture = Fixture::new(vec![short(option("a"), 'a'), short(option("b"), 'b')]);

        // Execute
        fixture.consume(&["-ab", "12", "13.5"]).unwrap();

        // Verify
        assert_eq!(fixture.captures(0), vec![some("12")]);
        assert_eq!(fixture.captures(1), vec![some("13.5")]);
    }

    #[rstest]
    #[case(vec!["-bx"])]
    #[case(vec!["-b", "-x"])]
    #[case(vec!["-xb"])]
    fn shorthand_missing_value(#[case] tokens: Vec<&str>) {
        let fixture = Fixture::new(vec![short(switch("x"), 'x'), short(option("b"), 'b')]);
        assert_eq!(
            fixture.consume(&tokens).unwrap_err(),
            MakeError::CommandLine(CommandLineError::MissingValue("-b".to_string()))
        );
    }

    #[test]
    fn value_error() {
        // Setup
        let entities: Vec<OptionEntity<i32>> = vec![OptionEntity::new(
            OptionConfig::new("level", ScalarKind::Integer, vec![], false, true),
            Box::new(crate::api::AnonymousCapture::bind(crate::api::Scalar::new(
                |target: &mut i32| target,
            ))),
        )
        .unwrap()];
        let index = validate(&entities).unwrap();

        // Execute
        let result = Resolver::new(&entities, &index).consume(&["--level", "12.5"]);

        // Verify
        assert_matches!(
            result,
            Err(MakeError::Value(ValueError::Number {
                kind: ScalarKind::Integer,
                ..
            }))
        );
        let value = Resolver::new(&entities, &index)
            .consume(&["--level", "12"])
            .unwrap();
        assert_eq!(value, 12);
    }

    #[test]
    fn free_standing() {
        // Setup
        let fixture = Fixture::new(vec![
            sequential("first", 1, true, false),
            sequential("second", 2, false, false),
            switch("flag"),
        ]);

        // Execute
        fixture.consume(&["a", "--flag", "b"]).unwrap();

        // Verify
        assert_eq!(fixture.captures(0), vec![some("a")]);
        assert_eq!(fixture.captures(1), vec![some("b")]);
        assert_eq!(fixture.captures(2), vec![None]);
    }

    #[test]
    fn free_standing_too_many() {
        let fixture = Fixture::new(vec![sequential("first", 1, true, false)]);
        assert_eq!(
            fixture.consume(&["a", "b"]).unwrap_err(),
            MakeError::CommandLine(CommandLineError::TooManyArguments("b".to_string()))
        );
    }

    #[test]
    fn free_standing_absorber() {
        // Setup
        let fixture = Fixture::new(vec![
            sequential("arg1", 1, true, false),
            sequential("list", 2, false, true),
            sequential("arg2", 3, true, false),
            sequential("arg3", 4, true, false),
        ]);

        // Execute
        fixture
            .consume(&["t1", "t2", "t3", "t4", "t5", "t6", "t7"])
            .unwrap();

        // Verify
        assert_eq!(fixture.captures(0), vec![some("t1")]);
        assert_eq!(
            fixture.captures(1),
            vec![some("t2"), some("t3"), some("t4"), some("t5")]
        );
        assert_eq!(fixture.captures(2), vec![some("t6")]);
        assert_eq!(fixture.captures(3), vec![some("t7")]);
    }

    #[test]
    fn free_standing_absorber_short() {
        // arg3 is left unfilled, which the mandatory check catches.
        let fixture = Fixture::new(vec![
            sequential("arg1", 1, true, false),
            sequential("list", 2, false, true),
            sequential("arg2", 3, true, false),
            sequential("arg3", 4, true, false),
        ]);
        assert_eq!(
            fixture.consume(&["t1", "t2"]).unwrap_err(),
            MakeError::CommandLine(CommandLineError::MissingMandatory("arg3".to_string()))
        );
    }

    #[test]
    fn mandatory() {
        let mut foo = option("foo");
        foo.mandatory = true;
        let fixture = Fixture::new(vec![option("bar"), foo]);

        assert_eq!(
            fixture.consume(&["--bar", "x"]).unwrap_err(),
            MakeError::CommandLine(CommandLineError::MissingMandatory("foo".to_string()))
        );
        fixture.consume(&["--foo", "x"]).unwrap();
    }

    #[test]
    fn excludes() {
        let mut val1 = short(option("val1"), 'a');
        val1.excludes = vec!["VAL2".to_string()];
        let fixture = Fixture::new(vec![val1, option("val2")]);

        assert_eq!(
            fixture.consume(&["-a", "x", "--val2", "y"]).unwrap_err(),
            MakeError::CommandLine(CommandLineError::Excluded {
                excluded: "val2".to_string(),
                by: "val1".to_string(),
            })
        );
        fixture.consume(&["-a", "x"]).unwrap();
        fixture.consume(&["--val2", "y"]).unwrap();
    }

    #[test]
    fn excludes_unknown_name() {
        let mut val1 = option("val1");
        val1.excludes = vec!["nothing".to_string(), "val1".to_string()];
        let fixture = Fixture::new(vec![val1]);
        fixture.consume(&["--val1", "x"]).unwrap();
    }

    #[rstest]
    #[case(vec!["--bar1", "--bar3"], Some(("bar3", "bar1", "default")))]
    #[case(vec!["--bar1", "--bar4"], None)]
    #[case(vec!["--bar3", "--bar4", "--bar5"], Some(("bar4", "bar3", "foobar")))]
    #[case(vec!["--bar3", "--bar5"], Some(("bar5", "bar3", "foobar")))]
    #[case(vec!["--bar2"], None)]
    fn excludes_group(
        #[case] tokens: Vec<&str>,
        #[case] expected: Option<(&str, &str, &str)>,
    ) {
        // Setup
        let group = |name: &str, groups: &[&str]| {
            let mut config = switch(name);
            config.excludes_group = groups.iter().map(|g| g.to_string()).collect();
            config
        };
        let fixture = Fixture::new(vec![
            group("bar1", &["default"]),
            group("bar2", &["default"]),
            group("bar3", &["default", "foobar"]),
            group("bar4", &["foobar"]),
            group("bar5", &["foobar"]),
        ]);

        // Execute
        let result = fixture.consume(&tokens);

        // Verify
        match expected {
            Some((excluded, by, group)) => assert_eq!(
                result.unwrap_err(),
                MakeError::CommandLine(CommandLineError::GroupExcluded {
                    excluded: excluded.to_string(),
                    by: by.to_string(),
                    group: group.to_string(),
                })
            ),
            None => result.unwrap(),
        }
    }

    #[test]
    fn requires() {
        let mut foo1 = option("foo1");
        foo1.requires = vec!["foo2".to_string(), "unknown".to_string()];
        let fixture = Fixture::new(vec![foo1, option("foo2")]);

        assert_eq!(
            fixture.consume(&["--foo1", "test"]).unwrap_err(),
            MakeError::CommandLine(CommandLineError::Requires {
                by: "foo1".to_string(),
                required: "foo2".to_string(),
            })
        );
        fixture.consume(&["--foo1=test", "--foo2", "x"]).unwrap();
        fixture.consume(&["--foo2", "x"]).unwrap();
    }

    #[rstest]
    #[case(vec!["--val3", "foo"], None)]
    #[case(vec!["--val1", "a", "--val2", "--val3", "foo"], None)]
    #[case(vec!["--val4"], None)]
    #[case(vec![], Some(CommandLineError::MandatoryIfNot { name: "val3".to_string(), alternatives: vec!["val4".to_string()] }))]
    #[case(vec!["--val2", "--val3", "x"], Some(CommandLineError::MandatoryIf { name: "val1".to_string(), trigger: "val2".to_string() }))]
    #[case(vec!["--val2"], Some(CommandLineError::MandatoryIf { name: "val1".to_string(), trigger: "val2".to_string() }))]
    fn mandatory_conditional(
        #[case] tokens: Vec<&str>,
        #[case] expected: Option<CommandLineError>,
    ) {
        // Setup
        let mut val1 = option("val1");
        val1.mandatory = true;
        val1.mandatory_if = vec!["val2".to_string()];
        let mut val3 = option("val3");
        val3.mandatory = true;
        val3.mandatory_if_not = vec!["val4".to_string()];
        let fixture = Fixture::new(vec![val1, switch("val2"), val3, switch("val4")]);

        // Execute
        let result = fixture.consume(&tokens);

        // Verify
        match expected {
            Some(error) => assert_eq!(result.unwrap_err(), MakeError::CommandLine(error)),
            None => result.unwrap(),
        }
    }

    #[test]
    fn check_order() {
        // Both a mandatory and an excludes violation: mandatory is reported first.
        let mut val1 = option("val1");
        val1.excludes = vec!["val2".to_string()];
        let mut val3 = option("val3");
        val3.mandatory = true;
        let fixture = Fixture::new(vec![val1, option("val2"), val3]);

        assert_eq!(
            fixture
                .consume(&["--val1", "a", "--val2", "b"])
                .unwrap_err(),
            MakeError::CommandLine(CommandLineError::MissingMandatory("val3".to_string()))
        );
    }
}
