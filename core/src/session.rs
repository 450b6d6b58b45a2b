use rand::Rng;

use crate::*;

/// Proof that a board load was requested, tagged with the session generation at that moment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub const fn generation(self) -> u64 {
        self.0
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The loaded board is now live and rendered.
    Committed,
    /// A newer load was requested in the meantime, the result was dropped.
    Superseded,
}

/// Owns the live board of one game and routes loads and clicks to it.
///
/// Loading happens in two phases so that the caller can await the network in between: [`Session::begin_load`]
/// hands out a ticket, and [`Session::finish_load`] accepts the result only if no newer ticket was handed out since.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    config: GameConfig,
    board: Option<Board>,
    generation: u64,
    loading: bool,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation = self.generation.wrapping_add(1);
        self.loading = true;
        log::debug!("loading board, generation {}", self.generation);
        LoadTicket(self.generation)
    }

    /// Resolves a load started with `ticket`.
    ///
    /// A failed load leaves the previous board live and displayed.
    pub fn finish_load<V>(
        &mut self,
        ticket: LoadTicket,
        result: Result<Board>,
        renderer: &mut V,
    ) -> Result<LoadOutcome>
    where
        V: Renderer + ?Sized,
    {
        if ticket.0 != self.generation {
            log::debug!(
                "dropping load of generation {}, current is {}",
                ticket.0,
                self.generation
            );
            return Ok(LoadOutcome::Superseded);
        }
        self.loading = false;

        let board = match result {
            Ok(board) => board,
            Err(err) => {
                log::error!("failed to load board: {}", err);
                return Err(err);
            }
        };

        renderer.render_board(&board);
        self.board = Some(board);
        log::debug!("board of generation {} is live", self.generation);
        Ok(LoadOutcome::Committed)
    }

    /// Loads a fresh board from `source` and swaps it in, discarding any board in play.
    pub async fn start<S, R, V>(
        &mut self,
        source: &S,
        rng: &mut R,
        renderer: &mut V,
    ) -> Result<LoadOutcome>
    where
        S: TriviaSource + ?Sized,
        R: Rng + ?Sized,
        V: Renderer + ?Sized,
    {
        let ticket = self.begin_load();
        let result = load_board(source, &self.config, rng).await;
        self.finish_load(ticket, result, renderer)
    }

    pub async fn restart<S, R, V>(
        &mut self,
        source: &S,
        rng: &mut R,
        renderer: &mut V,
    ) -> Result<LoadOutcome>
    where
        S: TriviaSource + ?Sized,
        R: Rng + ?Sized,
        V: Renderer + ?Sized,
    {
        self.start(source, rng, renderer).await
    }

    /// Advances the clicked clue and shows its new text, returning the state it moved to.
    pub fn on_cell_click<V>(
        &mut self,
        coords: Coord2,
        renderer: &mut V,
    ) -> Result<Option<RevealState>>
    where
        V: Renderer + ?Sized,
    {
        let board = self.board.as_mut().ok_or(GameError::InvalidCoords)?;

        Ok(board.reveal(coords)?.map(|revealed| {
            log::debug!("reveal {:?}: {:?}", coords, revealed.state);
            renderer.update_cell(coords, revealed.text);
            revealed.state
        }))
    }
}
