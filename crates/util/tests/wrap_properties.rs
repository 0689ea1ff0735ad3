use proptest::prelude::*;
use weft_util::fuzzer::Fuzzer;
use weft_util::strings::{wrap_with, Reflow, Step, WrapMethod, WrapOptions};

fn method() -> impl Strategy<Value = WrapMethod> {
    prop_oneof![
        Just(WrapMethod::HardBreakAlways),
        Just(WrapMethod::HardBreakWhenNecessary),
    ]
}

fn lines_except_last(text: &str) -> impl Iterator<Item = &str> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    lines.pop();
    lines.into_iter()
}

proptest! {
    #[test]
    fn short_input_is_unchanged(
        input in "[ -~]{0,20}",
        slack in 0usize..10,
        method in method(),
        breaker in "[|\n]{0,2}",
        hard_breaker in "[-~]{0,3}",
    ) {
        let width = input.len() + slack + 1;
        let options = WrapOptions::new(width)
            .method(method)
            .breaker(breaker)
            .hard_breaker(hard_breaker);
        prop_assert_eq!(wrap_with(&input, &options).unwrap(), input);
    }

    #[test]
    fn terminates_and_keeps_every_input_char(
        input in "[ -~\r\n]{0,500}",
        width in 1usize..=50,
        method in method(),
        hard_breaker_len in 0usize..4,
    ) {
        let options = WrapOptions::new(width)
            .method(method)
            .breaker("¶")
            .hard_breaker("¬".repeat(hard_breaker_len));
        let output = wrap_with(&input, &options).unwrap();
        prop_assert_eq!(output.replace(['¶', '¬'], ""), input);
    }

    #[test]
    fn every_step_pair_consumes_input(
        input in "[a-z -]{0,200}",
        width in 1usize..=20,
        method in method(),
        hard_breaker in "[~]{0,25}",
    ) {
        let options = WrapOptions::new(width)
            .method(method)
            .breaker("|")
            .hard_breaker(hard_breaker);
        let mut reflow = Reflow::new(&input, &options).unwrap();
        let mut previous = reflow.cursor().string_position;
        let mut idle_steps = 0;

        while reflow.step() == Step::Continue {
            let position = reflow.cursor().string_position;
            prop_assert!(position >= previous);
            idle_steps = if position == previous { idle_steps + 1 } else { 0 };
            prop_assert!(idle_steps < 2, "two steps in a row without progress at {}", position);
            previous = position;
        }
        prop_assert_eq!(reflow.cursor().string_position, input.chars().count());
    }

    #[test]
    fn broken_lines_fit_the_width(
        words in prop::collection::vec("[a-z]{1,15}", 1..40),
        width in 1usize..=30,
        method in method(),
        hard_breaker in "[-~]{0,3}",
    ) {
        let input = words.join(" ");
        let options = WrapOptions::new(width)
            .method(method)
            .breaker("\n")
            .hard_breaker(hard_breaker);
        let output = wrap_with(&input, &options).unwrap();

        for line in lines_except_last(&output) {
            prop_assert!(line.chars().count() <= width, "{:?} is wider than {}", line, width);
        }
    }

    #[test]
    fn rewrapping_fitting_output_is_stable(
        words in prop::collection::vec("[a-z]{1,12}", 1..40),
        width in 1usize..=30,
    ) {
        let input = words.join(" ");
        let options = WrapOptions::new(width).breaker("\n");
        let once = wrap_with(&input, &options).unwrap();

        if once.split('\n').all(|line| line.chars().count() <= width) {
            let twice = wrap_with(&once, &options).unwrap();
            prop_assert_eq!(twice, once);
        }
    }
}

#[test]
fn test_fuzzed_paragraphs_rewrap_stably() {
    let fuzzer = Fuzzer::new(Some([42u8; 32]));
    let mut checked = 0;

    for _ in 0..500 {
        let width = fuzzer.random_int(4, 40);
        let text = fuzzer.word_text(fuzzer.random_int(1, 60), 1, 10);
        let options = WrapOptions::new(width).breaker("\n");
        let once = wrap_with(&text, &options).unwrap();

        if once.split('\n').all(|line| line.chars().count() <= width) {
            assert_eq!(wrap_with(&once, &options).unwrap(), once, "width {width}: {text:?}");
            checked += 1;
        }
    }

    assert!(checked > 0);
}

#[test]
fn test_fuzzed_noise_terminates() {
    let fuzzer = Fuzzer::new(Some([9u8; 32]));

    for _ in 0..300 {
        let width = fuzzer.random_int(1, 50);
        let method = *fuzzer.pick(&[
            WrapMethod::HardBreakAlways,
            WrapMethod::HardBreakWhenNecessary,
        ]);
        let hard_breaker = fuzzer.random_string(fuzzer.random_int(0, 3), "¬");
        let text = fuzzer.noisy_text(fuzzer.random_int(0, 500));
        let options = WrapOptions::new(width)
            .method(method)
            .breaker("¶")
            .hard_breaker(hard_breaker);

        let output = wrap_with(&text, &options).unwrap();
        assert_eq!(output.replace(['¶', '¬'], ""), text);
    }
}
