use crate::assemble::POSTER_PLACEHOLDER;
use crate::types::SearchQuery;

/// Builds the instruction sent to the generation service.
///
/// Deterministic: the same title always yields byte-identical text. The
/// template is an output contract: it pins the section order, the CSS class
/// hooks the rendering shell styles, a single poster placeholder line, and
/// three mutually exclusive awards variants the model picks from based on
/// the facts it supplies. The title is embedded unescaped; the prompt is
/// only ever interpreted as natural language, never executed.
pub fn build_prompt(query: &SearchQuery) -> String {
    let title = query.as_str();
    let display_title = query.title_cased();

    format!(
        r#"Proporciona información sobre la película '{title}' en el siguiente formato exacto, sin incluir marcadores de código ni formato markdown:

<h1>🎬 {display_title}</h1>
{POSTER_PLACEHOLDER}

<div class='results-section'>
<div class='section-title'>📝 SINOPSIS</div>
<div class='section-content'>[Sinopsis de la película]</div>
</div>

<div class='results-section'>
<div class='section-title'>🏆 PREMIOS Y NOMINACIONES</div>
<div class='section-content'>
[Premios y nominaciones según las reglas de abajo]
</div>
</div>

<div class='results-section'>
<div class='section-title'>⭐ CALIFICACIÓN</div>
<div class='section-content'>
<span class='bullet-point'>•</span> Puntuación general: [puntuación]
<span class='bullet-point'>•</span> Críticas destacadas: [críticas principales]
</div>
</div>

<div class='results-section'>
<div class='section-title'>🎥 DATOS DE PRODUCCIÓN</div>
<div class='section-content'>
<span class='bullet-point'>•</span> Director: [nombre del director]
<span class='bullet-point'>•</span> Elenco principal: [actores principales]
<span class='bullet-point'>•</span> Año de lanzamiento: [año]
<span class='bullet-point'>•</span> Presupuesto y recaudación: [datos financieros]
</div>
</div>

<div class='results-section'>
<div class='section-title'>🌟 DATOS CURIOSOS</div>
<div class='section-content'>
<span class='bullet-point'>•</span> [Dato curioso 1]
<span class='bullet-point'>•</span> [Dato curioso 2]
<span class='bullet-point'>•</span> [Dato curioso 3]
</div>
</div>

Mantén la línea {POSTER_PLACEHOLDER} tal cual aparece arriba, una sola vez, justo después del título.

Para la sección de premios y nominaciones elige exactamente una de estas tres variantes:
- Si la película ganó al menos un premio, usa una línea por premio con este formato:
<p class='award-item'><strong>• [Año]:</strong> [Premio ganado]</p>
Por ejemplo: <p class='award-item'><strong>• 2001:</strong> Premio Oscar a Mejor Película</p>
- Si solo obtuvo nominaciones, usa una línea por nominación con este formato:
<p class='award-item nomination'><strong>• [Año]:</strong> [Nominación]</p>
- Si no tiene premios ni nominaciones, usa exactamente:
<div class='no-awards'>Esta película no registra premios ni nominaciones</div>

Si algún dato no está disponible, indica 'Información no disponible' en esa sección.
No incluyas ningún formato markdown ni delimitadores de código (```) en la respuesta."#
    )
}
