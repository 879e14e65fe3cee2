//! Integration tests for walking bean-style graphs
//!
//! Exercises the public API end to end over the `A` / `AImpl` / `AWrapper`
//! model: interface targets, collections, wrappers, cycles and scale.


use std::collections::BTreeMap;
use std::rc::Rc;

use common::{A, AImpl, AWrapper, a_target, describe_walker, node};
use graphwalk_core::{GraphWalker, Node, NodeRef, Property, ReflectError, TargetType, WalkConfig};
use rstest::rstest;

fn keys<U>(results: &BTreeMap<String, U>) -> Vec<&str> {
    results.keys().map(String::as_str).collect()
}

mod roots {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn null_root_yields_empty_results() {
        let mut walker = describe_walker();
        assert!(walker.walk(None).unwrap().results().is_empty());
    }

    #[test]
    fn string_root_is_recorded_under_its_type_name() {
        let text: NodeRef = Rc::new(String::from("String"));
        let mut walker = GraphWalker::typed(|text: &String| Some(text.clone()));

        let results = walker.walk(Some(&text)).unwrap().results();
        assert_eq!(keys(results), vec!["String"]);
        assert_eq!(results["String"], "String");
    }

    #[test]
    fn interface_root_is_recorded_once() {
        let mut walker = describe_walker();
        let results = walker
            .walk(Some(&node(AImpl::new("only"))))
            .unwrap()
            .results();

        assert_eq!(keys(results), vec!["AImpl"]);
        assert_eq!(results["AImpl"], "AImpl(only)");
    }

    #[test]
    fn universal_target_matches_a_string_root() {
        let text: NodeRef = Rc::new(String::from("anything"));
        let mut walker =
            GraphWalker::new(TargetType::any(), |node| Some(node.type_name().to_string()));

        let results = walker.walk(Some(&text)).unwrap().results();
        assert_eq!(results.len(), 1);
    }
}

mod collections {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    #[case::empty(0)]
    #[case::single(1)]
    #[case::three(3)]
    fn collection_root_records_every_element(#[case] count: usize) {
        let list: Vec<NodeRef> = (0..count)
            .map(|index| node(AImpl::new(&index.to_string())))
            .collect();
        let root: NodeRef = Rc::new(list);

        let mut walker = describe_walker();
        let results = walker.walk(Some(&root)).unwrap().results();

        let expected: Vec<String> = (0..count).map(|index| format!("Vec[{index}]")).collect();
        assert_eq!(keys(results), expected);
    }

    #[test]
    fn wrapper_and_its_child_are_both_recorded() {
        let wrapper = AWrapper::new("outer");
        wrapper.add_a(&AImpl::new("inner"));

        let mut walker = describe_walker();
        let results = walker.walk(Some(&node(wrapper))).unwrap().results();

        assert_eq!(keys(results), vec!["AWrapper", "AWrapper.someAs[0]"]);
        assert_eq!(results["AWrapper"], "AWrapper(outer, 1 children)");
        assert_eq!(results["AWrapper.someAs[0]"], "AImpl(inner)");
    }

    #[test]
    fn nested_wrappers_forming_a_tree() {
        let a = AWrapper::new("a");
        let a1 = AWrapper::new("a1");
        let a11 = AWrapper::new("a11");
        let a12 = AWrapper::new("a12");
        let a2 = AWrapper::new("a2");
        a.add_a(&a1);
        a1.add_a(&a11);
        a1.add_a(&a12);
        a.add_a(&a2);

        let mut walker = describe_walker();
        let results = walker.walk(Some(&node(a))).unwrap().results();

        assert_eq!(
            keys(results),
            vec![
                "AWrapper",
                "AWrapper.someAs[0]",
                "AWrapper.someAs[0].someAs[0]",
                "AWrapper.someAs[0].someAs[1]",
                "AWrapper.someAs[1]",
            ]
        );
    }
}

mod identity {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cycle_between_two_wrappers_records_two_entries() {
        let a = AWrapper::new("a");
        let b = AWrapper::new("b");
        a.add_a(&b);
        b.add_a(&a);

        let mut walker = describe_walker();
        let count = walker.walk(Some(&node(Rc::clone(&a)))).unwrap().results().len();
        assert_eq!(count, 2);

        a.unlink();
    }

    #[test]
    fn shared_child_is_recorded_at_first_path_only() {
        let shared = AImpl::new("shared");
        let left = AWrapper::new("left");
        left.add_a(&shared);
        let top = AWrapper::new("top");
        top.add_a(&left);
        top.add_a(&shared);

        let mut walker = describe_walker();
        let results = walker.walk(Some(&node(top))).unwrap().results();

        assert_eq!(
            keys(results),
            vec!["AWrapper", "AWrapper.someAs[0]", "AWrapper.someAs[0].someAs[0]"]
        );
        assert_eq!(results["AWrapper.someAs[0].someAs[0]"], "AImpl(shared)");
    }

    #[test]
    fn equal_values_are_distinct_nodes() {
        let list: Vec<NodeRef> = vec![node(AImpl::new("twin")), node(AImpl::new("twin"))];
        let root: NodeRef = Rc::new(list);

        let mut walker = describe_walker();
        let results = walker.walk(Some(&root)).unwrap().results();

        assert_eq!(keys(results), vec!["Vec[0]", "Vec[1]"]);
    }
}

mod reuse {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn clear_allows_a_fresh_walk() {
        let wrapper = AWrapper::new("w");
        wrapper.add_a(&AImpl::new("x"));
        let root = node(wrapper);

        let mut walker = describe_walker();
        let first = walker.walk(Some(&root)).unwrap().results().clone();
        walker.clear();
        let second = walker.walk(Some(&root)).unwrap().results().clone();

        assert_eq!(first, second);
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn retained_visited_set_skips_known_nodes_after_clear() {
        let wrapper = AWrapper::new("w");
        wrapper.add_a(&AImpl::new("x"));
        let root = node(wrapper);

        let mut walker = GraphWalker::builder()
            .target(a_target())
            .transform(|a| Some(a.describe()))
            .config(WalkConfig::new().retain_visited_on_clear(true))
            .build()
            .unwrap();
        walker.walk(Some(&root)).unwrap();
        walker.clear();

        assert!(walker.walk(Some(&root)).unwrap().results().is_empty());
        assert_eq!(walker.visited_count(), 2);
    }

    #[test]
    fn results_accumulate_across_roots() {
        let mut walker = describe_walker();
        walker.walk(Some(&node(AImpl::new("first")))).unwrap();
        walker.walk(Some(&node(AWrapper::new("second")))).unwrap();

        assert_eq!(keys(walker.results()), vec!["AImpl", "AWrapper"]);
    }
}

mod failures {
    use super::*;
    use pretty_assertions::assert_eq;

    /// An `A` whose properties cannot be read.
    struct Locked;

    impl A for Locked {
        fn describe(&self) -> String {
            "Locked".to_string()
        }
    }

    impl Node for Locked {
        fn properties(&self) -> Result<Vec<Property>, ReflectError> {
            Ok(vec![Property::failed(
                "secret",
                ReflectError::accessor("secret", "getter threw"),
            )])
        }
    }

    #[test]
    fn accessor_failure_reports_the_failing_path() {
        let wrapper = AWrapper::new("w");
        wrapper.add_a(&Rc::new(Locked));

        let mut walker = GraphWalker::new(
            TargetType::<dyn A>::interface("A")
                .implemented_by::<AWrapper>(|a| a)
                .implemented_by::<Locked>(|a| a),
            |a| Some(a.describe()),
        );
        let err = walker.walk(Some(&node(wrapper))).unwrap_err();

        assert_eq!(err.path(), "AWrapper.someAs[0].secret");
        assert_eq!(
            err.to_string(),
            "Traversal error at `AWrapper.someAs[0].secret`: accessor for property `secret` failed: getter threw"
        );
        assert_eq!(
            keys(walker.results()),
            vec!["AWrapper", "AWrapper.someAs[0]"]
        );
    }
}

mod scale {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hundred_wrappers_of_a_thousand_each() {
        let top = AWrapper::new("top");
        for i in 0..100 {
            let mid = AWrapper::new(&i.to_string());
            let leaves: Vec<Rc<AWrapper>> = (0..1000)
                .map(|j| AWrapper::new(&format!("{i}.{j}")))
                .collect();
            mid.add_all(&leaves);
            top.add_a(&mid);
        }
        let root: NodeRef = Rc::new(vec![node(top)]);

        let mut walker = describe_walker();
        let results = walker.walk(Some(&root)).unwrap().results();

        assert_eq!(results.len(), 100_101);
        assert_eq!(results["Vec[0]"], "AWrapper(top, 100 children)");
        assert_eq!(
            results["Vec[0].someAs[99].someAs[999]"],
            "AWrapper(99.999, 0 children)"
        );
        assert_eq!(walker.visited_count(), 100_101);
    }
}
