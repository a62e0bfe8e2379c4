//! Game catalog and its search box

use crate::component::escape_html;

/// Queries shorter than this show the whole catalog
pub const MIN_QUERY_CHARS: usize = 2;

/// One game on the home page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Game {
    /// Display name, matched by the search box
    pub name: &'static str,
    /// Route of the game page
    pub route: &'static str,
    /// Card image
    pub image: &'static str,
    /// Image alt text
    pub alt: &'static str,
}

impl Game {
    /// Card link markup
    #[must_use]
    pub fn to_html(&self) -> String {
        format!(
            r#"<a href="{}"><img src="{}" alt="{}"/></a>"#,
            escape_html(self.route),
            escape_html(self.image),
            escape_html(self.alt)
        )
    }
}

/// Games available on the site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameCatalog {
    games: Vec<Game>,
}

impl GameCatalog {
    /// Catalog of `games`, in display order
    #[inline]
    #[must_use]
    pub fn new(games: Vec<Game>) -> Self {
        Self { games }
    }

    /// Games in display order
    #[inline]
    #[must_use]
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    /// Games whose name contains `query`, ignoring case
    #[must_use]
    pub fn matching(&self, query: &str) -> Vec<Game> {
        let query = query.to_lowercase();
        self.games
            .iter()
            .filter(|game| game.name.to_lowercase().contains(&query))
            .copied()
            .collect()
    }
}

impl Default for GameCatalog {
    fn default() -> Self {
        Self::new(vec![
            Game {
                name: "Quem sou eu?",
                route: "/jogos/quem-sou-eu",
                image: "/static/images/home/quemSouEu.png",
                alt: "Who am I",
            },
            Game {
                name: "Memória das Emoções",
                route: "/jogos/jogo-da-memoria",
                image: "/static/images/home/memoriaDasEmocoes.png",
                alt: "Memory game",
            },
            Game {
                name: "Jogo das Cores",
                route: "/jogos/jogo-das-cores",
                image: "/static/images/home/jogoDasCores.png",
                alt: "Color game",
            },
            Game {
                name: "Vamos Contar",
                route: "/jogos/vamos-contar",
                image: "/static/images/home/VamosContar.png",
                alt: "Let's count",
            },
        ])
    }
}

/// What the home page shows for the current query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogView {
    /// Full catalog grid
    ShowAll,
    /// Only the matching games
    Results(Vec<Game>),
    /// Results area hidden; nothing matched
    Hidden,
}

/// Search box state over a [`GameCatalog`]
#[derive(Debug, Clone)]
pub struct CatalogSearch {
    catalog: GameCatalog,
    query: String,
    view: CatalogView,
}

impl CatalogSearch {
    /// Empty search showing the full catalog
    #[must_use]
    pub fn new(catalog: GameCatalog) -> Self {
        Self {
            catalog,
            query: String::new(),
            view: CatalogView::ShowAll,
        }
    }

    /// User typed `query`
    pub fn input(&mut self, query: &str) -> &CatalogView {
        self.query = query.to_string();
        self.view = if query.chars().count() < MIN_QUERY_CHARS {
            CatalogView::ShowAll
        } else {
            let matches = self.catalog.matching(query);
            if matches.is_empty() {
                CatalogView::Hidden
            } else {
                CatalogView::Results(matches)
            }
        };
        &self.view
    }

    /// Search box lost focus; an empty query brings the catalog back
    pub fn blur(&mut self) -> &CatalogView {
        if self.query.is_empty() {
            self.view = CatalogView::ShowAll;
        }
        &self.view
    }

    /// Current query
    #[inline]
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current view
    #[inline]
    #[must_use]
    pub fn view(&self) -> &CatalogView {
        &self.view
    }

    /// Markup of the games in the current view
    #[must_use]
    pub fn render(&self) -> String {
        let games = match &self.view {
            CatalogView::ShowAll => self.catalog.games(),
            CatalogView::Results(games) => games.as_slice(),
            CatalogView::Hidden => &[],
        };
        games.iter().map(Game::to_html).collect()
    }
}

impl Default for CatalogSearch {
    fn default() -> Self {
        Self::new(GameCatalog::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(view: &CatalogView) -> Vec<&'static str> {
        match view {
            CatalogView::Results(games) => games.iter().map(|g| g.name).collect(),
            other => panic!("expected Results, got {other:?}"),
        }
    }

    #[test]
    fn short_queries_show_everything() {
        let mut search = CatalogSearch::default();
        assert_eq!(search.input("j"), &CatalogView::ShowAll);
        assert_eq!(search.input(""), &CatalogView::ShowAll);
        assert_eq!(search.render().matches("<a ").count(), 4);
    }

    #[test]
    fn matches_ignore_case() {
        let mut search = CatalogSearch::default();
        assert_eq!(names(search.input("cor")), vec!["Jogo das Cores"]);
        assert_eq!(names(search.input("JOGO")), vec!["Jogo das Cores"]);
        assert_eq!(
            names(search.input("em")),
            vec!["Quem sou eu?", "Memória das Emoções"]
        );
    }

    #[test]
    fn non_ascii_query() {
        let mut search = CatalogSearch::default();
        assert_eq!(names(search.input("EMOÇÕES")), vec!["Memória das Emoções"]);
    }

    #[test]
    fn unmatched_query_hides_results() {
        let mut search = CatalogSearch::default();
        assert_eq!(search.input("xadrez"), &CatalogView::Hidden);
        assert_eq!(search.render(), "");
        assert_eq!(search.blur(), &CatalogView::Hidden);
    }

    #[test]
    fn blur_with_empty_query_restores_catalog() {
        let mut search = CatalogSearch::default();
        search.input("xadrez");
        search.input("");
        assert_eq!(search.blur(), &CatalogView::ShowAll);
    }

    #[test]
    fn card_markup() {
        let game = GameCatalog::default().games()[2];
        assert_eq!(
            game.to_html(),
            r#"<a href="/jogos/jogo-das-cores"><img src="/static/images/home/jogoDasCores.png" alt="Color game"/></a>"#
        );
    }
}
