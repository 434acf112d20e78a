#![cfg(target_arch = "wasm32")]

use checkers::api::CheckersGame;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn new_game_state_crosses_the_boundary() {
    let game = CheckersGame::new();

    let state = game.state().expect("state must serialize");
    let keys = js_sys::Object::keys(&js_sys::Object::from(state));

    assert!(keys.length() > 0);
}

#[wasm_bindgen_test]
fn opening_move_is_accepted() {
    let mut game = CheckersGame::new();

    assert!(game.apply_move(6, 3, 5, 4).is_ok());
}

#[wasm_bindgen_test]
fn moving_out_of_turn_is_rejected_with_a_reason() {
    let mut game = CheckersGame::new();

    let err = game.apply_move(3, 4, 4, 5).unwrap_err();

    assert!(err.as_string().unwrap().contains("turn"));
}
