use axum::{response::Html, routing::get, Router};

pub fn ui_routes() -> Router {
    Router::new().route("/", get(studio_page))
}

// Single-page studio UI. One dispatcher renders whichever step the session
// is on; each card is either upcoming, active, or completed - never two at
// once.
pub async fn studio_page() -> Html<&'static str> {
    Html(STUDIO_PAGE)
}

const STUDIO_PAGE: &str = r###"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>🎬 Shorts Studio - AI Shorts Workflow</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #e8e8e8;
            background: linear-gradient(135deg, #1a1a2e 0%, #16213e 50%, #0f1419 100%);
            background-attachment: fixed;
            min-height: 100vh;
        }

        .container { max-width: 860px; margin: 0 auto; padding: 2rem 20px; }

        .header { text-align: center; margin-bottom: 2rem; }
        .header h1 { font-size: 2.2rem; margin-bottom: 0.5rem; }
        .header p { color: #9aa5b1; }

        .error-banner {
            display: none;
            background: rgba(220, 53, 69, 0.15);
            border: 1px solid #dc3545;
            color: #f8d7da;
            padding: 0.75rem 1rem;
            border-radius: 8px;
            margin-bottom: 1.5rem;
        }

        .card {
            background: rgba(26, 26, 46, 0.85);
            border: 1px solid rgba(59, 130, 246, 0.3);
            border-radius: 10px;
            padding: 1.5rem;
            margin-bottom: 1.5rem;
        }
        .card.upcoming { display: none; }
        .card.completed { border-color: rgba(40, 167, 69, 0.5); }

        .card-title { display: flex; align-items: center; margin-bottom: 1rem; }
        .step-badge {
            width: 2rem; height: 2rem;
            border-radius: 50%;
            display: flex; align-items: center; justify-content: center;
            margin-right: 0.75rem;
            font-weight: bold;
            background: #3b82f6; color: white;
        }
        .completed .step-badge { background: #28a745; }

        .artifact {
            background: rgba(15, 20, 25, 0.8);
            border-radius: 8px;
            padding: 1rem;
            margin-bottom: 1rem;
            white-space: pre-wrap;
            max-height: 280px;
            overflow-y: auto;
        }

        .image-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 0.75rem; }
        .image-grid img { width: 100%; border-radius: 8px; }

        input[type="text"] {
            width: 100%;
            padding: 0.75rem;
            border-radius: 8px;
            border: 1px solid rgba(59, 130, 246, 0.4);
            background: rgba(15, 20, 25, 0.8);
            color: #e8e8e8;
            margin-bottom: 1rem;
        }

        .btn {
            padding: 0.6rem 1.4rem;
            border: none;
            border-radius: 8px;
            background: #3b82f6;
            color: white;
            font-size: 1rem;
            cursor: pointer;
        }
        .btn:hover { background: #2563eb; }
        .btn:disabled { background: #4a5568; cursor: not-allowed; }
        .btn.secondary { background: #28a745; }

        .note { color: #9aa5b1; font-size: 0.9rem; margin-top: 0.75rem; }
        audio { width: 100%; }
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>🎬 Shorts Studio</h1>
            <p>Script, visuals, narration and a video handoff - one step at a time</p>
        </div>

        <div id="error" class="error-banner"></div>

        <div id="card-topic" class="card">
            <div class="card-title"><div class="step-badge">1</div><h2>Pick a topic</h2></div>
            <input type="text" id="topic" placeholder="e.g., 5 Amazing Facts About Space">
            <button class="btn" id="btn-script" onclick="runStep('script')">Generate Script</button>
        </div>

        <div id="card-script" class="card upcoming">
            <div class="card-title"><div class="step-badge">2</div><h2>Script</h2></div>
            <div class="artifact" id="script-text"></div>
            <button class="btn" id="btn-images" onclick="runStep('images')">Generate Images</button>
        </div>

        <div id="card-images" class="card upcoming">
            <div class="card-title"><div class="step-badge">3</div><h2>Images</h2></div>
            <div class="image-grid" id="image-grid"></div>
            <p class="note" id="truncated-note"></p>
            <button class="btn" id="btn-audio" onclick="runStep('audio')">Generate Audio</button>
        </div>

        <div id="card-audio" class="card upcoming">
            <div class="card-title"><div class="step-badge">4</div><h2>Narration</h2></div>
            <div id="audio-slot"></div>
            <button class="btn" id="btn-video" onclick="runStep('video')">Create Video</button>
        </div>

        <div id="card-video" class="card upcoming">
            <div class="card-title"><div class="step-badge">✓</div><h2>Handoff</h2></div>
            <div class="artifact" id="video-message"></div>
            <button class="btn secondary" onclick="resetWorkflow()">Create Another</button>
        </div>
    </div>

    <script>
        let sessionId = null;
        let narrationText = null;
        const STEP_ORDER = ['topic_entry', 'script_ready', 'images_ready', 'audio_ready', 'video_ready'];
        const CARD_FOR_STEP = {
            topic_entry: 'card-topic',
            script_ready: 'card-script',
            images_ready: 'card-images',
            audio_ready: 'card-audio',
            video_ready: 'card-video',
        };

        async function createSession() {
            const response = await fetch('/api/workflow', { method: 'POST' });
            const data = await response.json();
            sessionId = data.session_id;
            render(data.state, {});
        }

        function showError(message) {
            const banner = document.getElementById('error');
            banner.textContent = message;
            banner.style.display = message ? 'block' : 'none';
        }

        function setBusy(busy) {
            for (const id of ['btn-script', 'btn-images', 'btn-audio', 'btn-video']) {
                document.getElementById(id).disabled = busy;
            }
        }

        async function runStep(step) {
            showError('');
            setBusy(true);
            try {
                const options = { method: 'POST' };
                if (step === 'script') {
                    options.headers = { 'Content-Type': 'application/json' };
                    options.body = JSON.stringify({ topic: document.getElementById('topic').value });
                }
                const response = await fetch(`/api/workflow/${sessionId}/${step}`, options);
                const data = await response.json();
                if (!response.ok) throw new Error(data.error || 'Step failed');
                render(data.state, data);
            } catch (err) {
                showError(err.message);
            } finally {
                setBusy(false);
            }
        }

        async function resetWorkflow() {
            showError('');
            const response = await fetch(`/api/workflow/${sessionId}/reset`, { method: 'POST' });
            const data = await response.json();
            narrationText = null;
            document.getElementById('topic').value = '';
            render(data.state, {});
        }

        // Single dispatcher: every card is upcoming, active or completed,
        // decided by the state tag alone.
        function render(state, extras) {
            const position = STEP_ORDER.indexOf(state.step);
            for (const [step, cardId] of Object.entries(CARD_FOR_STEP)) {
                const card = document.getElementById(cardId);
                const cardPosition = STEP_ORDER.indexOf(step);
                card.classList.remove('upcoming', 'completed');
                if (cardPosition > position) {
                    card.classList.add('upcoming');
                } else if (cardPosition < position) {
                    card.classList.add('completed');
                }
            }

            document.getElementById('script-text').textContent = state.script;

            const grid = document.getElementById('image-grid');
            grid.innerHTML = '';
            state.images.forEach((src, index) => {
                const img = document.createElement('img');
                img.src = src;
                img.alt = `Scene ${index + 1}`;
                grid.appendChild(img);
            });
            document.getElementById('truncated-note').textContent =
                extras.truncated ? 'Some scenes were dropped: only the first 4 become images.' : '';

            const audioSlot = document.getElementById('audio-slot');
            if (extras.useClientTTS) narrationText = extras.text;
            if (state.audio) {
                audioSlot.innerHTML = '';
                const player = document.createElement('audio');
                player.controls = true;
                player.src = state.audio;
                audioSlot.appendChild(player);
            } else if (narrationText) {
                audioSlot.innerHTML = '';
                const speak = document.createElement('button');
                speak.className = 'btn secondary';
                speak.textContent = '🔊 Play narration (browser voice)';
                speak.onclick = () => speechSynthesis.speak(new SpeechSynthesisUtterance(narrationText));
                audioSlot.appendChild(speak);
            }

            if (extras.message) {
                document.getElementById('video-message').textContent = extras.message;
            }
        }

        createSession().catch(err => showError(err.message));
    </script>
</body>
</html>
"###;
