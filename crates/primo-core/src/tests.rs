#[cfg(test)]
mod tests {
    use crate::*;
    use std::cell::RefCell;
    use std::collections::BTreeSet;
    use std::rc::Rc;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_controlled_history_and_subscription() {
        let owner = controlled(0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            owner.subscribe(move |v| seen.borrow_mut().push(*v));
        }
        let set_value = owner.setter();
        set_value(1);
        set_value(2);
        assert_eq!(owner.get(), 2);
        assert_eq!(owner.history(), vec![1, 2]);
        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_subscriber_reads_owner_back() {
        let owner = controlled(0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let (seen, read) = (seen.clone(), owner.clone());
            owner.subscribe(move |_| seen.borrow_mut().push((read.get(), read.history().len())));
        }
        (owner.setter())(1);
        (owner.setter())(5);
        assert_eq!(*seen.borrow(), vec![(1, 1), (5, 2)]);
    }

    #[test]
    fn test_subscriber_may_set_again() {
        let owner = controlled(0);
        {
            let again = owner.clone();
            owner.subscribe(move |v| {
                if *v > 10 {
                    again.set(10);
                }
            });
        }
        owner.set(42);
        assert_eq!(owner.get(), 10);
        assert_eq!(owner.history(), vec![42, 10]);
    }

    #[test]
    fn test_single_scenario_through_context() {
        let owner = controlled::<Option<String>>(None);
        let render_and_press = |item: &str| {
            let state = GroupState::new(Selection::single(owner.get(), owner.setter()));
            provide(state, |group| {
                group.activate(&ItemDescriptor::new(item));
            });
        };

        render_and_press("a");
        assert_eq!(owner.get(), Some("a".to_string()));
        // rerendered with value = "a"
        render_and_press("a");
        assert_eq!(owner.get(), None);
        assert_eq!(owner.history(), vec![Some("a".to_string()), None]);
    }

    #[test]
    fn test_multiple_scenario_through_context() {
        let owner = controlled(BTreeSet::<String>::new());
        for item in ["a", "b", "a"] {
            let state = GroupState::new(Selection::multiple(owner.get(), owner.setter()));
            provide(state, |group| {
                group.activate(&ItemDescriptor::new(item));
            });
        }
        assert_eq!(
            owner.history(),
            vec![set(&["a"]), set(&["a", "b"]), set(&["b"])]
        );
    }

    #[test]
    fn test_sibling_roots_do_not_share_changes() {
        let left = controlled::<Option<String>>(None);
        let right = controlled::<Option<String>>(Some("x".into()));

        provide(GroupState::new(Selection::single(left.get(), left.setter())), |g| {
            g.activate(&ItemDescriptor::new("a"));
        });
        provide(GroupState::new(Selection::single(right.get(), right.setter())), |g| {
            assert!(g.is_pressed("x"));
            assert!(!g.is_pressed("a"));
        });

        assert_eq!(left.get(), Some("a".to_string()));
        assert_eq!(right.get(), Some("x".to_string()));
        assert!(right.history().is_empty());
    }

    #[test]
    fn test_error_boundary_renders_fallback() {
        let el = ErrorBoundary(
            |info| Element::text(info.message).named("Fallback"),
            || {
                let group = use_context::<GroupState>("ToggleGroupItem")?;
                Ok(Element::text(format!("{:?}", group.mode())))
            },
        );
        assert_eq!(el.name, Some("Fallback"));
        assert_eq!(
            el.kind,
            HostKind::Text(
                "ToggleGroupItem compound components cannot be rendered outside the ToggleGroup component"
                    .into()
            )
        );
    }

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("#FF5733"), Color(255, 87, 51, 255));
        assert_eq!(Color::from_hex("#FF5733AA"), Color(255, 87, 51, 170));
        assert_eq!(Color::from_hex("#FF5733").to_css(), "#ff5733");
    }
}
