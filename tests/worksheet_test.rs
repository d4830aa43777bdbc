use mathsheet::shapes::{self, Placement, ShapeKind, ROW_STEP};
use mathsheet::{Canvas, BuiltinFont, MathProblem, Operator, Pt, Settings};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn sixteen_problems_fill_a_two_column_sheet() {
    let settings = Settings::default();
    let mut rng = StdRng::seed_from_u64(99);
    let doc = mathsheet::worksheet::generate(&settings, &mut rng).expect("generation succeeds");

    {
        let page = &doc.pages[doc.page_order[0]];
        let spans: Vec<_> = page.spans().collect();
        assert_eq!(spans.len(), 1 + 16 * 3, "title plus a, b, operator per problem");

        // every problem span after the title is a digit string or the operator
        for span in &spans[1..] {
            assert!(
                span.text == "+" || span.text.chars().all(|c| c.is_ascii_digit()),
                "unexpected span text {:?}",
                span.text
            );
        }
    }

    let mut bytes: Vec<u8> = Vec::new();
    doc.write(&mut bytes).expect("document renders");
    assert!(bytes.starts_with(b"%PDF-"));
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("Helvetica"));

    // document metadata reflects the configured operator
    assert!(text.contains("Math Practice"));
    assert!(text.contains("addition practice"));
    assert!(text.contains("math, worksheet, addition"));
}

#[test]
fn column_offsets_descend_by_exactly_one_row_step() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut canvas = Canvas::new(BuiltinFont::Helvetica, Pt(12.0));

    for column in 0..2 {
        let x = Pt(56.0) + Pt(283.0) * column as f32;
        let mut y = Pt(700.0);
        for row in 0..8 {
            let problem = MathProblem::new(|| (4, 3), Operator::Add);
            let next_y = shapes::render_random(&mut canvas, &problem, Placement { x, y }, &mut rng)
                .expect("render succeeds");
            assert_eq!(next_y, y - ROW_STEP, "column {column}, row {row}");
            assert!(next_y < y, "offsets must descend");
            y = next_y;
        }
    }
    assert!(canvas.finish().is_ok());
}

#[test]
fn the_same_seed_reproduces_the_same_sheet() {
    let settings = Settings::default();
    let doc1 = {
        let mut rng = StdRng::seed_from_u64(2024);
        mathsheet::worksheet::generate(&settings, &mut rng).expect("generation succeeds")
    };
    let doc2 = {
        let mut rng = StdRng::seed_from_u64(2024);
        mathsheet::worksheet::generate(&settings, &mut rng).expect("generation succeeds")
    };

    let spans1: Vec<_> = doc1.pages[doc1.page_order[0]].spans().cloned().collect();
    let spans2: Vec<_> = doc2.pages[doc2.page_order[0]].spans().cloned().collect();
    assert_eq!(spans1, spans2);
}

#[test]
fn a_fixed_shape_renders_identically_across_calls() {
    let problem = MathProblem::new(|| (9, 6), Operator::Add);
    let placement = Placement {
        x: Pt(100.0),
        y: Pt(500.0),
    };

    let mut canvas1 = Canvas::new(BuiltinFont::Helvetica, Pt(12.0));
    let mut canvas2 = Canvas::new(BuiltinFont::Helvetica, Pt(12.0));
    shapes::render(&mut canvas1, &problem, placement, ShapeKind::Robot).expect("render succeeds");
    shapes::render(&mut canvas2, &problem, placement, ShapeKind::Robot).expect("render succeeds");

    let content1 = canvas1.finish().expect("balanced canvas");
    let content2 = canvas2.finish().expect("balanced canvas");
    assert_eq!(content1.graphics, content2.graphics);
    assert_eq!(content1.spans, content2.spans);
}
