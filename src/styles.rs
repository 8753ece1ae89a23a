pub const HOME_CSS: &str = r#"
    body {
        margin: 0;
        background: #0d1117;
        color: #f0f0f0;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .campaign-container {
        overflow-x: hidden;
    }
    .hero-section {
        position: relative;
        height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        overflow: hidden;
        opacity: 0;
        transition: opacity 0.6s ease-in-out;
    }
    .hero-section.loaded {
        opacity: 1;
    }
    .candidate-images {
        position: absolute;
        inset: 0;
        display: flex;
    }
    .candidate-img {
        flex: 1;
        overflow: hidden;
        will-change: transform;
    }
    .candidate-img img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        filter: brightness(0.55);
    }
    .hero-content {
        position: relative;
        z-index: 2;
        text-align: center;
    }
    .hero-content h1 {
        font-size: 4rem;
        letter-spacing: 0.2em;
        margin: 0;
    }
    .hero-content h2 {
        font-weight: 400;
        color: #ffab40;
    }
    @keyframes fadeIn {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    .fade-in {
        animation: fadeIn 0.8s ease-out both;
    }
    .fade-in.delay-1 {
        animation-delay: 0.3s;
    }
    .scroll-indicator {
        position: absolute;
        bottom: 2rem;
        left: 50%;
        transform: translateX(-50%);
        z-index: 2;
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 0.5rem;
    }
    @keyframes bounce {
        0%, 100% { transform: translateY(0) rotate(45deg); }
        50% { transform: translateY(8px) rotate(45deg); }
    }
    .scroll-arrow {
        width: 14px;
        height: 14px;
        border-right: 2px solid #f0f0f0;
        border-bottom: 2px solid #f0f0f0;
        animation: bounce 1.4s infinite;
    }
    section {
        padding: 6rem 2rem;
    }
    .section-content {
        max-width: 1100px;
        margin: 0 auto;
        opacity: 0;
        transition: opacity 0.8s ease-out, transform 0.8s ease-out;
    }
    .slide-in-right { transform: translateX(80px); }
    .slide-in-left { transform: translateX(-80px); }
    .slide-in-bottom { transform: translateY(80px); }
    .section-content.visible {
        opacity: 1;
        transform: none;
    }
    .platform-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
        gap: 1.5rem;
    }
    .platform-item {
        background: #161b22;
        border-radius: 12px;
        padding: 1.5rem;
    }
    .carousel-container {
        position: relative;
        overflow: hidden;
    }
    .carousel-track {
        display: flex;
        transition: transform 0.5s ease-in-out;
    }
    .carousel-item {
        flex: 0 0 100%;
        box-sizing: border-box;
        padding: 2rem 4rem;
        background: #161b22;
        border-radius: 12px;
        position: relative;
    }
    .slide-counter {
        position: absolute;
        right: 1.5rem;
        bottom: 1rem;
        color: #8b949e;
    }
    .carousel-controls {
        display: flex;
        justify-content: space-between;
        margin-top: 1rem;
    }
    .nav-button {
        background: #ffab40;
        color: #0d1117;
        border: none;
        border-radius: 50%;
        width: 44px;
        height: 44px;
        font-size: 1.2rem;
        cursor: pointer;
    }
    .candidate-profiles {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
        gap: 2rem;
    }
    .candidate-image img {
        width: 160px;
        height: 160px;
        border-radius: 50%;
        object-fit: cover;
    }
    .candidate-info {
        color: #8b949e;
        margin-bottom: 1rem;
    }
    .inline-link {
        color: #ffab40;
    }
    .video-container {
        display: grid;
        grid-template-columns: 2fr 1fr;
        gap: 2rem;
    }
    .highlight-text {
        color: #ffab40;
        font-weight: 600;
    }
    .watch-button {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.8rem 1.6rem;
        background: #ffab40;
        color: #0d1117;
        border-radius: 999px;
        text-decoration: none;
        font-weight: 600;
    }
    .video-note {
        color: #8b949e;
    }
    footer {
        text-align: center;
        padding: 2rem;
        color: #8b949e;
    }
    .vote-button {
        position: fixed;
        right: 2rem;
        bottom: 2rem;
        z-index: 10;
        padding: 1rem 2rem;
        background: #ffab40;
        color: #0d1117;
        border-radius: 999px;
        text-decoration: none;
        font-weight: 700;
        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.4);
        animation: fadeIn 0.6s ease-out both;
    }
    @media (max-width: 768px) {
        .hero-content h1 {
            font-size: 2.2rem;
        }
        .carousel-item {
            padding: 1.5rem;
        }
        .video-container {
            grid-template-columns: 1fr;
        }
    }
"#;
