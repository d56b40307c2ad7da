//! End-to-end presenter scenarios
//!
//! These drive a full `Presenter` through inputs and ticks the way a front end
//! would, and check:
//! - A perfect run scores every question and picks fireworks
//! - Restart returns to the intro with every counter and collection cleared
//! - Intro and hover sparkles keep their cadence and placement
//! - Session invariants hold under random input across many seeds, with and
//!   without questions

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::constants::timing::{
        FEEDBACK_DELAY_FRAMES, HOVER_SPARKLE_EVERY, INTRO_SPARKLE_EVERY,
    };
    use crate::effects::TRAIL_CAPACITY;
    use crate::geometry::{Vec2, Viewport};
    use crate::input::Input;
    use crate::presenter::{Presenter, PresenterOptions};
    use crate::questions::{fallback_questions, OPTION_LABELS};
    use crate::result_fx::ResultMode;
    use crate::session::Screen;

    fn create_presenter(seed: u64) -> Presenter {
        Presenter::new(
            fallback_questions(),
            Viewport::new(1000.0, 700.0),
            PresenterOptions {
                seed: Some(seed),
                show_trail: true,
            },
        )
    }

    fn run_frames(p: &mut Presenter, frames: u32) {
        for _ in 0..frames {
            p.tick();
        }
    }

    #[test]
    fn test_perfect_run_then_restart() {
        let mut p = create_presenter(1);
        p.handle_input(Input::PointerMoved(Vec2::new(400.0, 200.0)));
        run_frames(&mut p, 10);

        p.handle_input(Input::PointerDown(p.layout().start_button().center()));
        assert_eq!(p.screen(), Screen::Quiz);

        for question in fallback_questions() {
            let label = OPTION_LABELS[question.correct_index()];
            p.handle_input(Input::Key(label));
            assert!(p.session().input_locked());
            run_frames(&mut p, FEEDBACK_DELAY_FRAMES);
        }

        assert_eq!(p.screen(), Screen::Result);
        assert_eq!(p.session().score(), 3);
        assert_eq!(p.session().ratio(), 1.0);
        assert_eq!(p.results().mode(), Some(ResultMode::Firework));

        run_frames(&mut p, 120);
        assert!(!p.results().is_empty(), "fireworks should be running");

        p.handle_input(Input::Key('R'));
        assert_eq!(p.screen(), Screen::Intro);
        assert_eq!(p.session().score(), 0);
        assert_eq!(p.session().current_index(), 0);
        assert!(!p.session().input_locked());
        assert_eq!(p.session().feedback_countdown(), 0);
        assert!(p.effects().is_empty(), "transient effects must be cleared");
        assert!(p.results().is_empty());
        assert_eq!(p.results().mode(), None);
    }

    #[test]
    fn test_mixed_run_picks_balloons() {
        let mut p = create_presenter(2);
        p.handle_input(Input::Confirm);

        // right, right, wrong: 2/3
        for key in ['b', 'a', 'd'] {
            p.handle_input(Input::Key(key));
            run_frames(&mut p, FEEDBACK_DELAY_FRAMES);
        }
        assert_eq!(p.session().score(), 2);
        assert_eq!(p.results().mode(), Some(ResultMode::Balloon));
    }

    #[test]
    fn test_all_wrong_picks_bubbles() {
        let mut p = create_presenter(3);
        p.handle_input(Input::Confirm);
        for _ in 0..3 {
            p.handle_input(Input::Key('d'));
            run_frames(&mut p, FEEDBACK_DELAY_FRAMES);
        }
        assert_eq!(p.session().score(), 0);
        assert_eq!(p.results().mode(), Some(ResultMode::Bubble));
    }

    #[test]
    fn test_empty_question_list() {
        let mut p = Presenter::new(
            Vec::new(),
            Viewport::new(800.0, 600.0),
            PresenterOptions {
                seed: Some(4),
                show_trail: true,
            },
        );
        p.handle_input(Input::Confirm);
        assert_eq!(p.screen(), Screen::Result);
        assert_eq!(p.session().score(), 0);
        assert_eq!(p.session().question_count(), 0);
        assert_eq!(p.results().mode(), Some(ResultMode::Bubble));

        run_frames(&mut p, 30);
        p.handle_input(Input::Key('r'));
        assert_eq!(p.screen(), Screen::Intro);
    }

    #[test]
    fn test_feedback_holds_for_delay() {
        let mut p = create_presenter(5);
        p.handle_input(Input::Confirm);
        p.handle_input(Input::Key('a'));

        run_frames(&mut p, FEEDBACK_DELAY_FRAMES - 1);
        assert_eq!(p.session().current_index(), 0);
        assert!(p.session().input_locked());

        p.tick();
        assert_eq!(p.session().current_index(), 1);
        assert!(!p.session().input_locked());
    }

    #[test]
    fn test_double_answer_is_idempotent() {
        let mut p = create_presenter(6);
        p.handle_input(Input::Confirm);
        p.handle_input(Input::Key('b'));
        let after_first = p.session().score();

        p.handle_input(Input::Key('b'));
        p.handle_input(Input::PointerDown(p.layout().boxes()[1].rect.center()));
        assert_eq!(p.session().score(), after_first);
        assert_eq!(p.session().selected_option(), Some(1));
    }

    #[test]
    fn test_trail_disabled_stays_empty() {
        let mut p = Presenter::new(
            fallback_questions(),
            Viewport::new(1000.0, 700.0),
            PresenterOptions {
                seed: Some(7),
                show_trail: false,
            },
        );
        p.handle_input(Input::PointerMoved(Vec2::new(100.0, 100.0)));
        run_frames(&mut p, 30);
        assert!(p.effects().trail.is_empty());
    }

    fn random_input(rng: &mut StdRng, viewport: Viewport) -> Input {
        let point = Vec2::new(
            rng.gen_range(0.0..viewport.width),
            rng.gen_range(0.0..viewport.height),
        );
        match rng.gen_range(0..10) {
            0..=3 => Input::PointerMoved(point),
            4..=6 => Input::PointerDown(point),
            7 => Input::Confirm,
            8 => {
                let keys = ['a', 'b', 'c', 'd', 'r', 'R', 'x', 'D'];
                Input::Key(keys[rng.gen_range(0..keys.len())])
            }
            _ => Input::Resized(Viewport::new(
                rng.gen_range(320.0..1600.0),
                rng.gen_range(240.0..1000.0),
            )),
        }
    }

    /// Invariants every frame must satisfy, whatever happened before it
    fn assert_frame_invariants(p: &Presenter, seed: u64, last_score: usize) {
        let session = p.session();
        let total = session.question_count();
        let score = session.score();
        assert!(score <= total, "seed {}: score {} > {}", seed, score, total);
        assert!(session.current_index() <= total);

        match session.screen() {
            Screen::Intro => {
                assert_eq!(score, 0);
                assert_eq!(session.current_index(), 0);
                assert!(!session.input_locked());
            }
            Screen::Quiz => {
                assert!(score >= last_score, "seed {}: score decreased", seed);
                assert!(
                    session.current_index() < total,
                    "seed {}: quiz screen without a question",
                    seed
                );
                assert!(session.current_question().is_some());
            }
            Screen::Result => {
                assert!(score >= last_score, "seed {}: score decreased", seed);
                assert_eq!(
                    session.current_index(),
                    total,
                    "seed {}: result before all questions consumed",
                    seed
                );
            }
        }
        assert_eq!(session.input_locked(), session.feedback_countdown() > 0);

        let effects = p.effects();
        assert!(effects.particles.iter().all(|particle| particle.life > 0.0));
        assert!(effects.ripples.iter().all(|ripple| ripple.alpha > 0.0));
        assert!(effects.trail.len() <= TRAIL_CAPACITY);
        if let Some(mode) = p.results().mode() {
            assert!(p.results().len() <= mode.max_live());
        }
    }

    fn sweep(mut p: Presenter, seed: u64, frames: u32) {
        let mut driver = StdRng::seed_from_u64(seed + 1000);
        let mut last_score = 0;

        for _ in 0..frames {
            if driver.gen_bool(0.2) {
                let input = random_input(&mut driver, p.viewport());
                p.handle_input(input);
            }
            p.tick();
            // Drawing must never trip over the current state either
            assert!(!p.render().is_empty());

            assert_frame_invariants(&p, seed, last_score);
            last_score = p.session().score();
        }
    }

    #[test]
    fn test_invariants_under_random_input() {
        for seed in 0..16 {
            sweep(create_presenter(seed), seed, 1500);
        }
    }

    #[test]
    fn test_invariants_without_questions() {
        for seed in 0..16 {
            let p = Presenter::new(
                Vec::new(),
                Viewport::new(1000.0, 700.0),
                PresenterOptions {
                    seed: Some(seed),
                    show_trail: true,
                },
            );
            sweep(p, seed, 1500);
        }
    }

    #[test]
    fn test_empty_list_cycles_through_result() {
        let mut p = Presenter::new(
            Vec::new(),
            Viewport::new(800.0, 600.0),
            PresenterOptions {
                seed: Some(21),
                show_trail: true,
            },
        );

        for _ in 0..5 {
            assert_eq!(p.screen(), Screen::Intro);
            p.handle_input(Input::Confirm);
            assert_eq!(p.screen(), Screen::Result);
            assert_eq!(p.results().mode(), Some(ResultMode::Bubble));

            run_frames(&mut p, 200);
            assert!(!p.results().is_empty(), "bubbles should be rising");
            assert!(p.results().len() <= ResultMode::Bubble.max_live());

            p.handle_input(Input::Key('r'));
            assert!(p.results().is_empty());
            assert!(p.effects().is_empty());
        }
    }

    #[test]
    fn test_intro_sparkle_cadence_and_band() {
        let mut p = create_presenter(31);
        let viewport = p.viewport();
        // One frame of motion at the fastest sparkle speed, plus gravity
        let slack = 4.0 + 0.05;

        for frame in 1..=90u64 {
            p.tick();
            assert_eq!(
                p.effects().particles.len() as u64,
                frame / INTRO_SPARKLE_EVERY,
                "frame {}",
                frame
            );

            if frame % INTRO_SPARKLE_EVERY == 0 {
                let newest = p.effects().particles.iter().last().expect("sparkle emitted");
                assert_eq!(newest.life, 119.0);
                assert!(newest.position.x >= -slack && newest.position.x <= viewport.width + slack);
                assert!(
                    newest.position.y >= viewport.height * 0.6 - slack
                        && newest.position.y <= viewport.height * 0.9 + slack,
                    "frame {}: y {} outside the sparkle band",
                    frame,
                    newest.position.y
                );
            }
        }
        assert!(p.effects().ripples.is_empty());
    }

    #[test]
    fn test_hover_sparkles_follow_hovered_box() {
        let mut p = create_presenter(32);
        p.handle_input(Input::Confirm);
        let target = p.layout().boxes()[2].rect;
        p.handle_input(Input::PointerMoved(target.center()));

        for frame in 1..=60u64 {
            p.tick();
            assert_eq!(p.layout().hovered_option(), Some(2));
            assert_eq!(
                p.effects().particles.len() as u64,
                frame / HOVER_SPARKLE_EVERY,
                "frame {}",
                frame
            );

            if frame % HOVER_SPARKLE_EVERY == 0 {
                let newest = p.effects().particles.iter().last().expect("sparkle emitted");
                assert_eq!(newest.life, 79.0);
                assert!(
                    target.contains(newest.position),
                    "frame {}: {:?} outside {:?}",
                    frame,
                    newest.position,
                    target
                );
            }
        }

        // Off every box: the sparkles stop
        p.handle_input(Input::PointerMoved(Vec2::new(5.0, 5.0)));
        let before = p.effects().particles.len();
        run_frames(&mut p, 8);
        assert!(p.effects().particles.len() <= before);
    }
}
