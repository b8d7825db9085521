use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};

use crate::config::AppConfig;
use crate::error::GameError;
use crate::game::{Game, MoveOutcome, PlayerId};
use crate::ui::profile::{profile_for, PlayerProfile};

/// The presentation adapter: owns a [`Game`], translates key presses into
/// engine calls, and rebuilds the game when a round ends. The engine itself
/// never restarts.
pub struct App {
    config: AppConfig,
    game: Game,
    profiles: [PlayerProfile; 2],
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    /// Build the app from a validated config.
    pub fn new(config: AppConfig) -> Result<Self, GameError> {
        let p1 = PlayerId::new(1);
        let p2 = PlayerId::new(2);
        let game = Game::new(config.board.width, config.board.height, p1, p2)?;
        let profiles = [
            PlayerProfile::from_config(p1, &config.players.one),
            PlayerProfile::from_config(p2, &config.players.two),
        ];
        let selected_column = config.board.width / 2;
        Ok(App {
            config,
            game,
            profiles,
            selected_column,
            should_quit: false,
            message: None,
        })
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.game.board().width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_token();
            }
            KeyCode::Char('r') => {
                self.reset();
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Discard the old game and construct a fresh one with the same players.
    fn reset(&mut self) {
        let board = &self.config.board;
        self.game = Game::new(board.width, board.height, self.profiles[0].id, self.profiles[1].id)
            .expect("config was validated at startup");
        self.selected_column = board.width / 2;
    }

    /// Drop the current player's token in the selected column.
    fn drop_token(&mut self) {
        match self.game.drop_token(self.selected_column) {
            Ok(MoveOutcome::Rejected) => {
                self.message = Some("Column is full!".to_string());
            }
            Ok(MoveOutcome::Win { player, .. }) => {
                let name = &profile_for(&self.profiles, player).name;
                self.message = Some(format!("{name} wins! Press 'r' for a new game."));
            }
            Ok(MoveOutcome::Tie { .. }) => {
                self.message = Some("It's a tie! Press 'r' for a new game.".to_string());
            }
            Ok(MoveOutcome::Continue { .. }) => {}
            Err(GameError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Err(err) => {
                // InvalidColumn can't happen while the selector is clamped,
                // but report it rather than swallowing it.
                self.message = Some(err.to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game,
            &self.profiles,
            self.selected_column,
            &self.message,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn app() -> App {
        App::new(AppConfig::default()).unwrap()
    }

    #[test]
    fn test_selector_starts_centered_and_clamps() {
        let mut app = app();
        assert_eq!(app.selected_column, 3);

        for _ in 0..10 {
            app.handle_key(key(KeyCode::Right));
        }
        assert_eq!(app.selected_column, 6);

        for _ in 0..10 {
            app.handle_key(key(KeyCode::Left));
        }
        assert_eq!(app.selected_column, 0);
    }

    #[test]
    fn test_enter_drops_a_token() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.game.board().get(5, 3), Some(PlayerId::new(1)));
        assert_eq!(app.game.current_player(), PlayerId::new(2));
    }

    #[test]
    fn test_win_message_uses_display_name() {
        let mut app = app();
        // Player one stacks column 0, player two stacks column 1
        for _ in 0..3 {
            app.selected_column = 0;
            app.handle_key(key(KeyCode::Enter));
            app.selected_column = 1;
            app.handle_key(key(KeyCode::Enter));
        }
        app.selected_column = 0;
        app.handle_key(key(KeyCode::Enter));

        assert!(app.game.is_terminal());
        assert_eq!(
            app.message.as_deref(),
            Some("Red wins! Press 'r' for a new game.")
        );
    }

    #[test]
    fn test_reset_discards_terminal_game() {
        let mut app = app();
        for _ in 0..3 {
            app.selected_column = 0;
            app.handle_key(key(KeyCode::Enter));
            app.selected_column = 1;
            app.handle_key(key(KeyCode::Enter));
        }
        app.selected_column = 0;
        app.handle_key(key(KeyCode::Enter));
        assert!(app.game.is_terminal());

        app.handle_key(key(KeyCode::Char('r')));
        assert!(!app.game.is_terminal());
        assert_eq!(app.game.current_player(), PlayerId::new(1));
        assert_eq!(app.selected_column, 3);
    }

    #[test]
    fn test_drop_on_terminal_game_reports_game_over() {
        let mut app = app();
        for _ in 0..3 {
            app.selected_column = 0;
            app.handle_key(key(KeyCode::Enter));
            app.selected_column = 1;
            app.handle_key(key(KeyCode::Enter));
        }
        app.selected_column = 0;
        app.handle_key(key(KeyCode::Enter));

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(
            app.message.as_deref(),
            Some("Game over! Press 'r' to restart.")
        );
    }

    #[test]
    fn test_full_column_message() {
        let mut app = app();
        app.selected_column = 0;
        for _ in 0..6 {
            app.handle_key(key(KeyCode::Enter));
        }
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.message.as_deref(), Some("Column is full!"));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}
