mod alphabet_words;
mod alphabets;
mod home;
mod numbers;
mod practice_layout;
mod rhyme;
mod rhymes;
mod spelling;
mod spelling_word;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use alphabet_words::AlphabetWordsView;
pub use alphabets::AlphabetsView;
pub use home::HomeView;
pub use numbers::NumbersView;
pub use practice_layout::PracticeLayout;
pub use rhyme::RhymeView;
pub use rhymes::RhymeListView;
pub use spelling::SpellingListView;
pub use spelling_word::SpellingWordView;
pub use state::{ViewError, ViewState, view_state_from_resource};
