use crate::source::HttpTriviaSource;
use crate::utils::*;
use clap::Args;
use jeopardy_core as game;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use yew::prelude::*;

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Number of categories on the board
    #[arg(long, default_value_t = game::GameConfig::DEFAULT_CATEGORIES)]
    pub categories: game::Coord,

    /// Number of clues in each category
    #[arg(long, default_value_t = game::GameConfig::DEFAULT_CLUES_PER_CATEGORY)]
    pub clues: game::Coord,

    /// How many categories to list before sampling
    #[arg(long, default_value_t = game::GameConfig::DEFAULT_CATEGORY_POOL)]
    pub pool: u16,

    /// Base URL of the trivia service
    #[arg(long, default_value = jeopardy_protocol::DEFAULT_BASE_URL)]
    pub api_base: String,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,
}

impl GameProps {
    pub(crate) fn config(&self) -> game::GameConfig {
        game::GameConfig::new(self.categories, self.clues, self.pool)
    }

    /// Seed for the load of `ticket`, distinct per restart even when forced.
    fn seed_for(&self, ticket: game::LoadTicket) -> u64 {
        self.seed
            .map_or_else(js_random_seed, |seed| seed.wrapping_add(ticket.generation()))
    }
}

pub(crate) enum Msg {
    Restart,
    Loaded {
        ticket: game::LoadTicket,
        result: game::Result<game::Board>,
    },
    Reveal(game::Coord2),
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    x: game::Coord,
    y: game::Coord,
    text: AttrValue,
    state: game::RevealState,
    callback: Callback<game::Coord2>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    use game::RevealState::*;

    let CellProps {
        x,
        y,
        text,
        state,
        callback,
    } = props.clone();

    let class = classes!(
        "clue",
        match state {
            Hidden => "hidden",
            Question => "question",
            Answer => "answer",
        }
    );
    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("({}, {}) click", x, y);
        callback.emit((x, y));
    });

    html! {
        <td id={format!("{x}-{y}")} {class} {onclick}>{text}</td>
    }
}

/// The game board: owns the session, draws its grid and turns clicks into reveals.
pub(crate) struct GameView {
    session: game::Session,
    grid: game::GridModel,
    source: HttpTriviaSource,
    error: Option<game::GameError>,
}

impl GameView {
    fn start_load(&mut self, ctx: &Context<Self>) {
        let ticket = self.session.begin_load();
        let source = self.source.clone();
        let config = *self.session.config();
        let seed = ctx.props().seed_for(ticket);

        ctx.link().send_future(async move {
            let mut rng = SmallRng::seed_from_u64(seed);
            let result = game::load_board(&source, &config, &mut rng).await;
            Msg::Loaded { ticket, result }
        });
    }

    fn finish_load(&mut self, ticket: game::LoadTicket, result: game::Result<game::Board>) -> bool {
        match self.session.finish_load(ticket, result, &mut self.grid) {
            Ok(game::LoadOutcome::Committed) => {
                self.error = None;
                true
            }
            Ok(game::LoadOutcome::Superseded) => false,
            Err(err) => {
                self.error = Some(err);
                true
            }
        }
    }

    fn reveal(&mut self, coords: game::Coord2) -> bool {
        match self.session.on_cell_click(coords, &mut self.grid) {
            Ok(state) => state.is_some(),
            Err(err) => {
                log::error!("click on {:?} does not match the board: {}", coords, err);
                false
            }
        }
    }

    fn state_at(&self, coords: game::Coord2) -> game::RevealState {
        self.session
            .board()
            .and_then(|board| board.state_at(coords).ok())
            .unwrap_or_default()
    }

    fn status_line(&self) -> Html {
        match (&self.error, self.session.is_loading()) {
            (_, true) => html! { <p class="status loading">{"Loading…"}</p> },
            (Some(err), false) if err.is_retryable() => html! {
                <p class="status error">{format!("Could not load a new board: {err}. Press restart to try again.")}</p>
            },
            (Some(err), false) => html! {
                <p class="status error">{format!("Could not build a board: {err}")}</p>
            },
            (None, false) => html! {},
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        ctx.link().send_message(Msg::Restart);
        Self {
            session: game::Session::new(props.config()),
            grid: game::GridModel::new(),
            source: HttpTriviaSource::new(props.api_base.clone()),
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Restart => {
                log::debug!("restart");
                self.start_load(ctx);
                true
            }
            Loaded { ticket, result } => self.finish_load(ticket, result),
            Reveal(coords) => self.reveal(coords),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let cb_restart = ctx.link().callback(|_: MouseEvent| Msg::Restart);
        let callback = ctx.link().callback(Msg::Reveal);

        html! {
            <div class="jeopardy">
                <nav>
                    <button id="restart" onclick={cb_restart}>{"Restart"}</button>
                </nav>
                {self.status_line()}
                <table id="jeopardy">
                    <thead>
                        <tr>
                            { for self.grid.headers().iter().map(|title| html! { <th>{title.clone()}</th> }) }
                        </tr>
                    </thead>
                    <tbody>
                        {
                            for self.grid.rows().map(|row| html! {
                                <tr>
                                    {
                                        for row.map(|((x, y), text)| {
                                            let state = self.state_at((x, y));
                                            let text = AttrValue::from(text.to_string());
                                            let callback = callback.clone();
                                            html! {
                                                <CellView {x} {y} {text} {state} {callback}/>
                                            }
                                        })
                                    }
                                </tr>
                            })
                        }
                    </tbody>
                </table>
            </div>
        }
    }
}
