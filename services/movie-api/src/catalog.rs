//! Built-in movie catalog used to seed empty stores

use crate::models::movie::{Director, Genre, NewMovie};

/// The starter catalog: six movies, one with a detailed genre and one with
/// a detailed director, the rest plain names
pub fn starter_movies() -> Vec<NewMovie> {
    vec![
        NewMovie {
            title: "The Shawshank Redemption".to_string(),
            description: "Over the course of several years, two convicts form a friendship, \
                          seeking consolation and, eventually, redemption through basic compassion."
                .to_string(),
            genre: Genre::Detailed {
                name: "Drama".to_string(),
                description: "In film and television, drama is a category of narrative fiction \
                              intended to be more serious than humorous in tone."
                    .to_string(),
            },
            director: Director::Simple("Frank Darabont".to_string()),
            image_path: "https://media.themoviedb.org/t/p/w300_and_h450_bestv2/9cqNxx0GxF0bflZmeSMuL5tnGzr.jpg"
                .to_string(),
            featured: true,
        },
        NewMovie {
            title: "The Lord of the Rings: The Fellowship of the Ring".to_string(),
            description: "Young hobbit Frodo Baggins inherits a mysterious ring and must leave \
                          home to keep it from its evil creator, guarded by a fellowship bound \
                          for Mount Doom."
                .to_string(),
            genre: Genre::Simple("Adventure, Fantasy, Action".to_string()),
            director: Director::Simple("Peter Jackson".to_string()),
            image_path: "https://www.themoviedb.org/movie/120-the-lord-of-the-rings-the-fellowship-of-the-ring"
                .to_string(),
            featured: false,
        },
        NewMovie {
            title: "Indiana Jones and the Temple of Doom".to_string(),
            description: "After arriving in India, Indiana Jones is asked by a desperate village \
                          to find a mystical stone and stumbles upon a cult plotting in the \
                          catacombs of an ancient palace."
                .to_string(),
            genre: Genre::Simple("Adventure, Action".to_string()),
            director: Director::Detailed {
                name: "Steven Spielberg".to_string(),
                bio: "American film director, writer and producer. A major figure of the New \
                      Hollywood era and pioneer of the modern blockbuster."
                    .to_string(),
                birth: Some("1946".to_string()),
                death: None,
            },
            image_path: "https://media.themoviedb.org/t/p/w300_and_h450_bestv2/om61eim8XwLfh6QXzh2r0Q4blBz.jpg"
                .to_string(),
            featured: false,
        },
        NewMovie {
            title: "Inception".to_string(),
            description: "Cobb, a thief who infiltrates the subconscious of his targets, is \
                          offered a chance to regain his old life in exchange for planting an \
                          idea in a target's mind."
                .to_string(),
            genre: Genre::Simple("Action, Science Fiction, Adventure".to_string()),
            director: Director::Simple("Christopher Nolan".to_string()),
            image_path: "https://media.themoviedb.org/t/p/w300_and_h450_bestv2/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg"
                .to_string(),
            featured: true,
        },
        NewMovie {
            title: "Spirited Away".to_string(),
            description: "A young girl, Chihiro, becomes trapped in a strange world of spirits \
                          and must find the courage to free her transformed parents."
                .to_string(),
            genre: Genre::Simple("Animation, Family, Fantasy".to_string()),
            director: Director::Simple("Hayao Miyazaki".to_string()),
            image_path: "https://media.themoviedb.org/t/p/w300_and_h450_bestv2/39wmItIWsg5sZMyRUHLkWBcuVCM.jpg"
                .to_string(),
            featured: false,
        },
        NewMovie {
            title: "Eternal Sunshine of the Spotless Mind".to_string(),
            description: "Joel Barish, heartbroken that his girlfriend had him erased from her \
                          memory, undergoes the same procedure and realises too late that he \
                          still loves her."
                .to_string(),
            genre: Genre::Simple("Science Fiction, Drama, Romance".to_string()),
            director: Director::Simple("Michel Gondry".to_string()),
            image_path: "https://media.themoviedb.org/t/p/w300_and_h450_bestv2/5MwkWH9tYHv3mV9OdYTMR5qreIz.jpg"
                .to_string(),
            featured: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_movies_mix_simple_and_detailed_shapes() {
        let movies = starter_movies();
        assert_eq!(movies.len(), 6);
        assert_eq!(
            movies
                .iter()
                .filter(|m| matches!(m.genre, Genre::Detailed { .. }))
                .count(),
            1
        );
        assert_eq!(
            movies
                .iter()
                .filter(|m| matches!(m.director, Director::Detailed { .. }))
                .count(),
            1
        );
    }
}
