use crate::model::{Rhyme, RhymeId};

struct RhymeEntry {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    duration: &'static str,
    difficulty: &'static str,
    text: &'static str,
}

const RHYMES: [RhymeEntry; 6] = [
    RhymeEntry {
        id: "twinkle-twinkle",
        title: "Twinkle Twinkle Little Star",
        description: "A classic nursery rhyme about a shining star",
        duration: "30 seconds",
        difficulty: "Easy",
        text: "Twinkle, twinkle, little star,
How I wonder what you are.
Up above the world so high,
Like a diamond in the sky.
Twinkle, twinkle, little star,
How I wonder what you are.",
    },
    RhymeEntry {
        id: "mary-had-lamb",
        title: "Mary Had a Little Lamb",
        description: "The story of Mary and her faithful lamb",
        duration: "25 seconds",
        difficulty: "Easy",
        text: "Mary had a little lamb,
Its fleece was white as snow.
And everywhere that Mary went,
The lamb was sure to go.
It followed her to school one day,
Which was against the rule.",
    },
    RhymeEntry {
        id: "humpty-dumpty",
        title: "Humpty Dumpty",
        description: "The tale of Humpty Dumpty's great fall",
        duration: "20 seconds",
        difficulty: "Easy",
        text: "Humpty Dumpty sat on a wall,
Humpty Dumpty had a great fall.
All the king's horses and all the king's men,
Couldn't put Humpty together again.",
    },
    RhymeEntry {
        id: "baa-baa-black-sheep",
        title: "Baa Baa Black Sheep",
        description: "A sheep sharing its wool with everyone",
        duration: "25 seconds",
        difficulty: "Easy",
        text: "Baa, baa, black sheep,
Have you any wool?
Yes sir, yes sir,
Three bags full.
One for the master,
One for the dame,
And one for the little boy
Who lives down the lane.",
    },
    RhymeEntry {
        id: "old-macdonald",
        title: "Old MacDonald Had a Farm",
        description: "A farmer and all his animal friends",
        duration: "45 seconds",
        difficulty: "Medium",
        text: "Old MacDonald had a farm,
E-I-E-I-O!
And on his farm he had a cow,
E-I-E-I-O!
With a moo-moo here,
And a moo-moo there,
Here a moo, there a moo,
Everywhere a moo-moo,
Old MacDonald had a farm,
E-I-E-I-O!",
    },
    RhymeEntry {
        id: "row-row-boat",
        title: "Row, Row, Row Your Boat",
        description: "A gentle boat ride down the stream",
        duration: "20 seconds",
        difficulty: "Easy",
        text: "Row, row, row your boat,
Gently down the stream.
Merrily, merrily, merrily, merrily,
Life is but a dream.",
    },
];

impl RhymeEntry {
    fn to_rhyme(&self) -> Rhyme {
        Rhyme {
            id: RhymeId::new(self.id),
            title: self.title.to_string(),
            description: self.description.to_string(),
            duration_label: self.duration.to_string(),
            difficulty: self.difficulty.to_string(),
            text: self.text.to_string(),
        }
    }
}

#[must_use]
pub fn rhymes() -> Vec<Rhyme> {
    RHYMES.iter().map(RhymeEntry::to_rhyme).collect()
}

#[must_use]
pub fn find_rhyme(id: &str) -> Option<Rhyme> {
    RHYMES
        .iter()
        .find(|entry| entry.id == id)
        .map(RhymeEntry::to_rhyme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_id() {
        let rhyme = find_rhyme("humpty-dumpty").unwrap();
        assert_eq!(rhyme.title, "Humpty Dumpty");
        assert_eq!(rhyme.tokens().len(), 26);
        assert!(find_rhyme("missing").is_none());
    }

    #[test]
    fn ids_are_unique() {
        let all = rhymes();
        let mut ids: Vec<_> = all.iter().map(|r| r.id.as_str().to_string()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), all.len());
    }
}
