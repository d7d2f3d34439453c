use super::dto::MovieDto;
use crate::modules::movie::domain::entities::{MovieDetails, MovieRecord};
use crate::shared::domain::value_objects::MovieProvider;

/// Converts wire records into domain records tagged with their provider
pub struct MovieApiMapper;

impl MovieApiMapper {
    pub fn to_domain(dto: MovieDto, provider: MovieProvider) -> MovieRecord {
        let details = MovieDetails {
            rated: dto.rated,
            released: dto.released,
            runtime: dto.runtime,
            genre: dto.genre,
            director: dto.director,
            writer: dto.writer,
            actors: dto.actors,
            plot: dto.plot,
            language: dto.language,
            country: dto.country,
            awards: dto.awards,
            poster: dto.poster,
            metascore: dto.metascore,
            rating: dto.rating,
            votes: dto.votes,
            movie_type: dto.r#type,
        };

        MovieRecord::new(provider, dto.id, dto.title, dto.year, dto.price, details)
    }

    pub fn to_domain_list(dtos: Vec<MovieDto>, provider: MovieProvider) -> Vec<MovieRecord> {
        dtos.into_iter()
            .map(|dto| Self::to_domain(dto, provider))
            .collect()
    }
}
