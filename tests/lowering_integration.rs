// tests/lowering_integration.rs
//! Integration tests driving TypeLowering end to end against a live context.

use tyctx::{Span, TupleTypeElt, TypeContext, TypeContextError, TypeLowering};

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn lowering_builds_canonical_types() {
    init_tracing();
    let ctx = TypeContext::new();
    let sema = TypeLowering::new(&ctx);

    let int = sema.build_int_type(Span::new(0, 3)).unwrap();
    let void = sema.build_void_type(Span::new(7, 11)).unwrap();
    assert_ne!(int, void);

    // Locations are advisory: different spans, same canonical type.
    assert_eq!(int, sema.build_int_type(Span::new(40, 43)).unwrap());

    let pair = sema
        .build_tuple_type(
            Span::new(12, 13),
            &[TupleTypeElt::named("x", int), TupleTypeElt::unnamed(void)],
            Span::new(24, 25),
        )
        .unwrap();
    let pair_again = sema
        .build_tuple_type(
            Span::new(30, 31),
            &[TupleTypeElt::named("x", int), TupleTypeElt::unnamed(void)],
            Span::new(44, 45),
        )
        .unwrap();
    assert_eq!(pair, pair_again);
    assert_eq!(ctx.display(pair).unwrap(), "(x: Int, Void)");

    let func = sema
        .build_function_type(pair, Span::new(26, 28), void)
        .unwrap();
    assert_eq!(ctx.unwrap_function(func).unwrap(), Some((pair, void)));
    assert_eq!(ctx.display(func).unwrap(), "(x: Int, Void) -> Void");
}

#[test]
fn empty_tuple_lowers_to_unit() {
    init_tracing();
    let ctx = TypeContext::new();
    let sema = TypeLowering::new(&ctx);

    let unit = sema
        .build_tuple_type(Span::new(5, 6), &[], Span::new(6, 7))
        .unwrap();
    assert_eq!(unit, ctx.unit_type().unwrap());
    assert_eq!(ctx.display(unit).unwrap(), "()");
}

#[test]
fn foreign_type_rejected_with_location() {
    init_tracing();
    let home = TypeContext::new();
    let away = TypeContext::new();
    let foreign_int = away.int_type().unwrap();

    let sema = TypeLowering::new(&home);
    let err = sema
        .build_tuple_type(
            Span::new(10, 11),
            &[TupleTypeElt::unnamed(foreign_int)],
            Span::new(18, 19),
        )
        .unwrap_err();

    match err {
        TypeContextError::InvalidReference {
            expected,
            found,
            span,
        } => {
            assert_eq!(expected, home.id());
            assert_eq!(found, away.id());
            // The error is labeled with the merged delimiter span.
            let span = span.expect("facade attaches a location");
            assert_eq!(span.offset(), 10);
            assert_eq!(span.len(), 9);
        }
        other => panic!("expected InvalidReference, got {:?}", other),
    }
}

#[test]
fn teardown_ends_the_session() {
    init_tracing();
    let ctx = TypeContext::new();
    let sema = TypeLowering::new(&ctx);
    let int = sema.build_int_type(Span::new(0, 3)).unwrap();

    ctx.teardown().unwrap();

    assert!(matches!(
        sema.build_int_type(Span::new(0, 3)),
        Err(TypeContextError::UseAfterTeardown { .. })
    ));
    assert!(matches!(
        sema.build_void_type(Span::new(0, 4)),
        Err(TypeContextError::UseAfterTeardown { .. })
    ));
    assert!(matches!(
        sema.build_tuple_type(Span::new(0, 1), &[TupleTypeElt::unnamed(int)], Span::new(8, 9)),
        Err(TypeContextError::UseAfterTeardown { .. })
    ));
    assert!(matches!(
        sema.build_function_type(int, Span::new(4, 6), int),
        Err(TypeContextError::UseAfterTeardown { .. })
    ));
    assert!(matches!(
        ctx.teardown(),
        Err(TypeContextError::UseAfterTeardown { .. })
    ));

    // The error carries the span the facade attached.
    match sema.build_int_type(Span::new(2, 5)) {
        Err(TypeContextError::UseAfterTeardown { span, .. }) => {
            let span = span.expect("facade attaches a location");
            assert_eq!(span.offset(), 2);
            assert_eq!(span.len(), 3);
        }
        other => panic!("expected UseAfterTeardown, got {:?}", other),
    }
}

#[test]
fn concurrent_interning_yields_one_instance() {
    init_tracing();
    let ctx = TypeContext::new();
    let int = ctx.int_type().unwrap();
    let void = ctx.void_type().unwrap();

    let mut tuple_ids = Vec::new();
    let mut func_ids = Vec::new();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                s.spawn(|| {
                    let sema = TypeLowering::new(&ctx);
                    let mut last = None;
                    for _ in 0..100 {
                        let tuple = sema
                            .build_tuple_type(
                                Span::new(0, 1),
                                &[TupleTypeElt::named("x", int), TupleTypeElt::unnamed(void)],
                                Span::new(14, 15),
                            )
                            .unwrap();
                        let func = sema
                            .build_function_type(tuple, Span::new(16, 18), void)
                            .unwrap();
                        last = Some((tuple, func));
                    }
                    last.unwrap()
                })
            })
            .collect();
        for handle in handles {
            let (tuple, func) = handle.join().unwrap();
            tuple_ids.push(tuple);
            func_ids.push(func);
        }
    });

    // Every racer converged on the single canonical instance.
    tuple_ids.dedup();
    func_ids.dedup();
    assert_eq!(tuple_ids.len(), 1);
    assert_eq!(func_ids.len(), 1);

    // Seeded singletons plus exactly one tuple and one function.
    assert_eq!(ctx.type_count().unwrap(), 5);
}
